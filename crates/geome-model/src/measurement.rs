//! Morphological measurement traits and their provenance labels.

use serde::{Deserialize, Serialize};

/// Base provenance label for every trait value extracted from VertNet text.
pub const EXTRACTED_WITH_TRAITER: &str = "Extracted with Traiter";

/// Placeholder written into missing trait value and unit fields.
pub const UNKNOWN_MEASUREMENT: &str = "unknown";

/// Separator between value and unit in the combined measurement string.
pub const VALUE_UNIT_SEPARATOR: &str = " ; ";

/// One measured trait: the VertNet column prefix and its GEOME ontology term.
///
/// A trait with key `body_mass` owns the source columns `body_mass.value`,
/// `body_mass.units`, `body_mass.units_inferred` and `body_mass.estimated_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSpec {
    /// VertNet column prefix (e.g. "hind_foot_length").
    pub key: String,
    /// GEOME `measurementType` term (e.g. "pes length").
    pub term: String,
}

impl TraitSpec {
    pub fn new(key: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            term: term.into(),
        }
    }

    pub fn value_column(&self) -> String {
        format!("{}.value", self.key)
    }

    pub fn units_column(&self) -> String {
        format!("{}.units", self.key)
    }

    pub fn inferred_column(&self) -> String {
        format!("{}.units_inferred", self.key)
    }

    pub fn estimated_column(&self) -> String {
        format!("{}.estimated_value", self.key)
    }

    /// Wide column holding the combined `"<value> ; <unit>"` string.
    pub fn combined_column(&self) -> &str {
        &self.key
    }

    /// Wide column holding this trait's provenance label until the unpivot.
    pub fn method_column(&self) -> String {
        format!("measurementMethod_{}", self.key)
    }

    /// All four VertNet source columns of this trait.
    pub fn source_columns(&self) -> [String; 4] {
        [
            self.value_column(),
            self.units_column(),
            self.inferred_column(),
            self.estimated_column(),
        ]
    }
}

/// How a trait value was derived by the extraction tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementMethod {
    Extracted,
    Inferred,
    Estimated,
    EstimatedInferred,
}

impl MeasurementMethod {
    pub fn from_flags(inferred: bool, estimated: bool) -> Self {
        match (estimated, inferred) {
            (true, true) => Self::EstimatedInferred,
            (true, false) => Self::Estimated,
            (false, true) => Self::Inferred,
            (false, false) => Self::Extracted,
        }
    }

    /// Derive the method from the raw `units_inferred` / `estimated_value` cells.
    pub fn from_indicators(inferred: Option<&str>, estimated: Option<&str>) -> Self {
        Self::from_flags(is_truthy(inferred), is_truthy(estimated))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Extracted => EXTRACTED_WITH_TRAITER,
            Self::Inferred => "Extracted with Traiter ; inferred value",
            Self::Estimated => "Extracted with Traiter ; estimated value",
            Self::EstimatedInferred => "Extracted with Traiter ; estimated value; inferred value",
        }
    }
}

/// VertNet writes indicator flags as free text ("TRUE", "True", "true").
pub fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|raw| raw.to_ascii_lowercase().contains("true"))
}

//! Mapping configuration: the VertNet input contract and the GEOME target schema.
//!
//! The configuration is deserialized from `standards/geome/mapping.toml`
//! and treated as immutable for the whole run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::measurement::TraitSpec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    pub input: InputContract,
    pub schema: SchemaConfig,
    pub constants: GeomeConstants,
    pub dates: DateRules,
    pub traits: Vec<TraitSpec>,
    pub output: OutputSettings,
}

/// Columns the VertNet export must carry, trait columns excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputContract {
    pub required_columns: Vec<String>,
}

/// Column selection and renaming applied by the schema mapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Non-trait columns kept for GEOME, by pre-rename name, in output order.
    pub selected_columns: Vec<String>,
    /// Source name to GEOME term. Columns not listed keep their name.
    #[serde(default)]
    pub rename: BTreeMap<String, String>,
}

/// Values GEOME requires but VertNet does not provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeomeConstants {
    pub sampling_protocol: String,
    pub basis_of_record: String,
    pub locality: String,
    /// Text used for a missing elevation inside `verbatimElevation`.
    pub missing_elevation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRules {
    /// Regex patterns; an event date matching any of them has no usable year.
    pub exclusions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub chunk_count: usize,
    pub file_prefix: String,
}

impl MappingConfig {
    /// Every column the input CSV must provide, trait columns included.
    pub fn required_source_columns(&self) -> Vec<String> {
        let mut columns = self.input.required_columns.clone();
        columns.extend(self.trait_source_columns());
        columns
    }

    /// Columns kept by the schema mapper, trait columns appended in trait order.
    pub fn selected_columns(&self) -> Vec<String> {
        let mut columns = self.schema.selected_columns.clone();
        columns.extend(self.trait_source_columns());
        columns
    }

    /// The GEOME name a selected column ends up with.
    pub fn target_name<'a>(&'a self, column: &'a str) -> &'a str {
        self.schema
            .rename
            .get(column)
            .map(String::as_str)
            .unwrap_or(column)
    }

    pub fn trait_keys(&self) -> Vec<&str> {
        self.traits.iter().map(|spec| spec.key.as_str()).collect()
    }

    fn trait_source_columns(&self) -> impl Iterator<Item = String> + '_ {
        self.traits.iter().flat_map(TraitSpec::source_columns)
    }
}

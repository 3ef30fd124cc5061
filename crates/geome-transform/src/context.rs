//! Immutable run context built once from the loaded standards.

use geome_model::{CountryVocabulary, GeomeConstants, MappingConfig, MappingStandards, TraitSpec};

use crate::error::Result;
use crate::normalization::YearExtractor;

/// Everything the stage functions read, compiled once per run.
#[derive(Debug, Clone)]
pub struct TransformContext {
    pub config: MappingConfig,
    pub countries: CountryVocabulary,
    pub years: YearExtractor,
}

impl TransformContext {
    /// Compile the date exclusions and take ownership of the reference data.
    pub fn new(standards: MappingStandards) -> Result<Self> {
        let years = YearExtractor::new(&standards.config.dates.exclusions)?;
        Ok(Self {
            config: standards.config,
            countries: standards.countries,
            years,
        })
    }

    pub fn traits(&self) -> &[TraitSpec] {
        &self.config.traits
    }

    pub fn constants(&self) -> &GeomeConstants {
        &self.config.constants
    }

    pub fn required_source_columns(&self) -> Vec<String> {
        self.config.required_source_columns()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use geome_model::{DateRules, InputContract, OutputSettings, SchemaConfig};

    use crate::error::TransformError;

    use super::*;

    fn standards(exclusions: Vec<String>) -> MappingStandards {
        MappingStandards {
            config: MappingConfig {
                input: InputContract {
                    required_columns: vec!["eventdate".to_string()],
                },
                schema: SchemaConfig {
                    selected_columns: vec![],
                    rename: BTreeMap::new(),
                },
                constants: GeomeConstants {
                    sampling_protocol: "Unknown".to_string(),
                    basis_of_record: "PreservedSpecimen".to_string(),
                    locality: "Unknown".to_string(),
                    missing_elevation: "nan".to_string(),
                },
                dates: DateRules { exclusions },
                traits: vec![TraitSpec::new("body_mass", "body mass")],
                output: OutputSettings {
                    chunk_count: 13,
                    file_prefix: "out_".to_string(),
                },
            },
            countries: CountryVocabulary::default(),
        }
    }

    #[test]
    fn context_compiles_exclusions() {
        let context = TransformContext::new(standards(vec!["unknown".to_string()])).unwrap();
        assert!(context.years.is_excluded("unknown date"));
        assert_eq!(context.traits().len(), 1);
        assert_eq!(context.required_source_columns().len(), 5);
    }

    #[test]
    fn bad_exclusion_is_rejected() {
        let result = TransformContext::new(standards(vec!["[".to_string()]));
        assert!(matches!(result, Err(TransformError::InvalidPattern { .. })));
    }
}

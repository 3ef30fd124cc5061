pub mod columns;
pub mod country;
pub mod mapping;
pub mod measurement;

pub use country::{CountryMatch, CountryVocabulary, UNKNOWN_COUNTRY};
pub use mapping::{
    DateRules, GeomeConstants, InputContract, MappingConfig, OutputSettings, SchemaConfig,
};
pub use measurement::{
    EXTRACTED_WITH_TRAITER, MeasurementMethod, TraitSpec, UNKNOWN_MEASUREMENT,
    VALUE_UNIT_SEPARATOR, is_truthy,
};

/// Everything the pipeline reads from the standards directory, loaded once.
#[derive(Debug, Clone)]
pub struct MappingStandards {
    pub config: MappingConfig,
    pub countries: CountryVocabulary,
}

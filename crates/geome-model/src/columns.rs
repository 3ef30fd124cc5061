//! Column names used by the VertNet export and the GEOME template.
//!
//! Source names are the lowercase VertNet export headers. Derived names are
//! columns the pipeline creates before schema mapping, and GEOME names are the
//! final template terms of the long-format table.

// VertNet source columns
pub const EVENT_DATE: &str = "eventdate";
pub const VERBATIM_EVENT_DATE_SOURCE: &str = "verbatimeventdate";
pub const LIFE_STAGE_SOURCE: &str = "lifestage_cor";
pub const SEX: &str = "sex";
pub const BINOMIAL: &str = "binomial";
pub const LOCALITY: &str = "locality";
pub const COUNTRY: &str = "country";
pub const MAX_ELEVATION_SOURCE: &str = "maximumelevationinmeters";
pub const MIN_ELEVATION_SOURCE: &str = "minimumelevationinmeters";

// Derived before schema mapping
pub const INDIVIDUAL_ID: &str = "individualID";
pub const YEAR_COLLECTED: &str = "yearCollected";
pub const VERBATIM_EVENT_DATE: &str = "verbatimEventDate";
pub const VERBATIM_LOCALITY: &str = "verbatimLocality";
pub const VERBATIM_ELEVATION: &str = "verbatimElevation";
pub const SAMPLING_PROTOCOL: &str = "samplingProtocol";
pub const BASIS_OF_RECORD: &str = "basisOfRecord";

// Derived after schema mapping
pub const MATERIAL_SAMPLE_ID: &str = "materialSampleID";
pub const EVENT_ID: &str = "eventID";

// Long-format measurement columns
pub const MEASUREMENT_TYPE: &str = "measurementType";
pub const MEASUREMENT_VALUE: &str = "measurementValue";
pub const MEASUREMENT_METHOD: &str = "measurementMethod";
pub const VERBATIM_MEASUREMENT_UNIT: &str = "verbatimMeasurementUnit";
pub const DIAGNOSTIC_ID: &str = "diagnosticID";

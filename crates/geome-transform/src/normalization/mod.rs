//! Field normalizers applied to the wide table before schema mapping.
//!
//! - **year**: `yearCollected` from free-text event dates
//! - **categorical**: life stage, sex, scientific name
//! - **country**: `verbatimLocality` capture and country vocabulary lookup
//! - **derived**: elevation, verbatim event date, GEOME constants

pub mod categorical;
pub mod country;
pub mod derived;
pub mod year;

pub use categorical::{
    NOT_COLLECTED, clean_life_stage, clean_scientific_name, clean_sex, normalize_life_stage,
    normalize_scientific_name, normalize_sex,
};
pub use country::{clean_country, verbatim_locality};
pub use derived::{add_geome_constants, combine_elevation, copy_verbatim_event_date};
pub use year::{UNKNOWN_YEAR, YearExtractor, clean_year_collected};

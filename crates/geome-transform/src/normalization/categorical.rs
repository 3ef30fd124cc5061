//! Life stage, sex and scientific name normalization.
//!
//! VertNet values are mapped onto the small GEOME vocabularies; anything
//! outside the known set collapses to the vocabulary's "no data" value.

use polars::prelude::DataFrame;

use geome_model::columns::{BINOMIAL, LIFE_STAGE_SOURCE, SEX};

use crate::error::Result;
use crate::frame::map_string_column;

pub const NOT_COLLECTED: &str = "Not Collected";
pub const UNKNOWN_SCIENTIFIC_NAME: &str = "Unknown";

/// Map a VertNet life stage to "adult", "juvenile" or "Not Collected".
pub fn normalize_life_stage(raw: Option<&str>) -> &'static str {
    match raw {
        Some("Adult") => "adult",
        Some("Juvenile") => "juvenile",
        _ => NOT_COLLECTED,
    }
}

/// Keep "female" and "male" exactly; everything else becomes empty.
pub fn normalize_sex(raw: Option<&str>) -> &'static str {
    match raw {
        Some("female") => "female",
        Some("male") => "male",
        _ => "",
    }
}

pub fn normalize_scientific_name(raw: Option<&str>) -> String {
    raw.unwrap_or(UNKNOWN_SCIENTIFIC_NAME).to_string()
}

pub fn clean_life_stage(df: &DataFrame) -> Result<DataFrame> {
    map_string_column(df, LIFE_STAGE_SOURCE, |v| {
        normalize_life_stage(v).to_string()
    })
}

pub fn clean_sex(df: &DataFrame) -> Result<DataFrame> {
    map_string_column(df, SEX, |v| normalize_sex(v).to_string())
}

pub fn clean_scientific_name(df: &DataFrame) -> Result<DataFrame> {
    map_string_column(df, BINOMIAL, normalize_scientific_name)
}

//! Country normalization against the GEOME vocabulary.

use polars::prelude::DataFrame;

use geome_model::columns::{COUNTRY, LOCALITY, VERBATIM_LOCALITY};
use geome_model::{CountryMatch, CountryVocabulary};

use crate::error::Result;
use crate::frame::{string_values, with_string_column};

/// `"<locality>,<country>"` with missing parts left empty.
pub fn verbatim_locality(locality: Option<&str>, country: Option<&str>) -> String {
    format!("{},{}", locality.unwrap_or(""), country.unwrap_or(""))
}

/// Capture `verbatimLocality` from the raw values, then resolve `country`.
pub fn clean_country(df: &DataFrame, countries: &CountryVocabulary) -> Result<DataFrame> {
    let localities = string_values(df, LOCALITY)?;
    let raw_countries = string_values(df, COUNTRY)?;

    let verbatim: Vec<String> = localities
        .iter()
        .zip(&raw_countries)
        .map(|(locality, country)| verbatim_locality(locality.as_deref(), country.as_deref()))
        .collect();

    let mut aliased = 0usize;
    let mut unknown = 0usize;
    let resolved: Vec<String> = raw_countries
        .iter()
        .map(|raw| {
            let (country, matched) = countries.resolve(raw.as_deref());
            match matched {
                CountryMatch::Alias => aliased += 1,
                CountryMatch::Unknown => unknown += 1,
                CountryMatch::Accepted => {}
            }
            country.to_string()
        })
        .collect();
    tracing::debug!(aliased, unknown, "normalized countries");

    let out = with_string_column(df, VERBATIM_LOCALITY, verbatim)?;
    with_string_column(&out, COUNTRY, resolved)
}

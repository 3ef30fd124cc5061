//! `yearCollected` extraction from free-text VertNet event dates.

use std::sync::LazyLock;

use regex::{Regex, RegexSet};

use polars::prelude::DataFrame;

use geome_model::columns::{EVENT_DATE, YEAR_COLLECTED};

use crate::error::{Result, TransformError};
use crate::frame::{string_values, with_string_column};

/// Sentinel for dates without a trustworthy year.
pub const UNKNOWN_YEAR: &str = "Unknown";

static TRAILING_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}$").expect("Invalid trailing year regex"));

static LEADING_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}").expect("Invalid leading year regex"));

/// Pulls a four-digit year from the start or end of an event date.
///
/// Event dates matching any exclusion pattern (ranges, placeholder tokens,
/// known bad literals) never produce a year.
#[derive(Debug, Clone)]
pub struct YearExtractor {
    exclusions: RegexSet,
}

impl YearExtractor {
    pub fn new<I, S>(exclusions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = exclusions
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        // Compile one by one so a bad entry is named in the error.
        for pattern in &patterns {
            Regex::new(pattern).map_err(|e| TransformError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
        }
        let exclusions = RegexSet::new(&patterns).map_err(|e| TransformError::InvalidPattern {
            pattern: patterns.join("|"),
            message: e.to_string(),
        })?;
        Ok(Self { exclusions })
    }

    /// True when the date matches an exclusion pattern.
    pub fn is_excluded(&self, date: &str) -> bool {
        self.exclusions.is_match(date)
    }

    /// Extract the collection year, or `None` when there is none.
    ///
    /// A missing date is treated as the literal "Unknown", which the default
    /// exclusions reject.
    pub fn year(&self, raw: Option<&str>) -> Option<String> {
        let date = raw.unwrap_or(UNKNOWN_YEAR);
        if self.is_excluded(date) {
            return None;
        }
        if let Some(found) = TRAILING_YEAR.find(date) {
            return Some(found.as_str().to_string());
        }
        LEADING_YEAR
            .find(date)
            .map(|found| found.as_str().to_string())
    }

    /// Like [`YearExtractor::year`] with the "Unknown" sentinel filled in.
    pub fn extract(&self, raw: Option<&str>) -> String {
        self.year(raw).unwrap_or_else(|| UNKNOWN_YEAR.to_string())
    }
}

/// Add `yearCollected` derived from `eventdate`.
pub fn clean_year_collected(df: &DataFrame, years: &YearExtractor) -> Result<DataFrame> {
    let dates = string_values(df, EVENT_DATE)?;
    let collected: Vec<String> = dates
        .iter()
        .map(|date| years.extract(date.as_deref()))
        .collect();
    let unknown = collected.iter().filter(|y| *y == UNKNOWN_YEAR).count();
    tracing::debug!(unknown, "extracted collection years");
    with_string_column(df, YEAR_COLLECTED, collected)
}

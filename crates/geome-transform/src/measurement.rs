//! Value/unit splitting, unusable-row filtering and `diagnosticID` assignment.

use polars::prelude::{BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};

use geome_model::UNKNOWN_MEASUREMENT;
use geome_model::columns::{DIAGNOSTIC_ID, MEASUREMENT_VALUE, VERBATIM_MEASUREMENT_UNIT};

use crate::error::Result;
use crate::frame::{string_values, with_string_column};

/// Split a combined `"<value> ; <unit>"` string on the first `;`.
///
/// Both sides are trimmed and an "unknown" unit becomes empty. Without a
/// separator the whole string is the value.
pub fn split_measurement(combined: &str) -> (String, String) {
    let (value, unit) = combined.split_once(';').unwrap_or((combined, ""));
    let unit = unit.trim();
    let unit = if unit == UNKNOWN_MEASUREMENT { "" } else { unit };
    (value.trim().to_string(), unit.to_string())
}

/// Rewrite `measurementValue` and add `verbatimMeasurementUnit`.
pub fn split_value_unit(df: &DataFrame) -> Result<DataFrame> {
    let combined = string_values(df, MEASUREMENT_VALUE)?;
    let mut values: Vec<Option<String>> = Vec::with_capacity(combined.len());
    let mut units: Vec<String> = Vec::with_capacity(combined.len());
    for entry in &combined {
        match entry {
            Some(entry) => {
                let (value, unit) = split_measurement(entry);
                values.push(Some(value));
                units.push(unit);
            }
            None => {
                values.push(None);
                units.push(String::new());
            }
        }
    }
    let out = with_string_column(df, MEASUREMENT_VALUE, values)?;
    with_string_column(&out, VERBATIM_MEASUREMENT_UNIT, units)
}

/// A value that is missing, placeholder or list-like cannot be submitted.
///
/// The substring checks are case-sensitive: "one" catches spelled-out
/// counts, "unknown" the placeholder, and "," multi-valued cells. A value
/// that is empty after trimming is dropped too, so every kept row carries a
/// measurement.
pub fn is_unusable_value(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(value) => {
            value.is_empty()
                || value.contains(',')
                || value.contains("one")
                || value.contains(UNKNOWN_MEASUREMENT)
        }
    }
}

/// Drop rows whose `measurementValue` is unusable.
pub fn drop_unusable_measurements(df: &DataFrame) -> Result<DataFrame> {
    let values = string_values(df, MEASUREMENT_VALUE)?;
    let keep: Vec<bool> = values
        .iter()
        .map(|value| !is_unusable_value(value.as_deref()))
        .collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let out = df.filter(&mask)?;
    tracing::debug!(
        kept = out.height(),
        dropped = df.height() - out.height(),
        "filtered measurements"
    );
    Ok(out)
}

/// Number the rows `0..height` in `diagnosticID`.
pub fn assign_diagnostic_ids(df: &DataFrame) -> Result<DataFrame> {
    let ids: Vec<u64> = (0..df.height() as u64).collect();
    let mut out = df.clone();
    out.with_column(Series::new(DIAGNOSTIC_ID.into(), ids))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_both_sides() {
        assert_eq!(split_measurement("50 ; g"), ("50".to_string(), "g".to_string()));
        assert_eq!(
            split_measurement("12.5 ; mm ; extra"),
            ("12.5".to_string(), "mm ; extra".to_string())
        );
    }

    #[test]
    fn unknown_unit_becomes_empty() {
        assert_eq!(split_measurement("50 ; unknown"), ("50".to_string(), String::new()));
        assert_eq!(
            split_measurement("unknown ; unknown"),
            ("unknown".to_string(), String::new())
        );
        assert_eq!(split_measurement("7"), ("7".to_string(), String::new()));
    }

    #[test]
    fn unusable_values() {
        assert!(is_unusable_value(None));
        assert!(is_unusable_value(Some("")));
        assert!(is_unusable_value(Some("unknown")));
        assert!(is_unusable_value(Some("12, 14")));
        assert!(is_unusable_value(Some("none")));
        assert!(!is_unusable_value(Some("50")));
        assert!(!is_unusable_value(Some("Unknown")));
    }

    #[test]
    fn filter_then_number() {
        let df = DataFrame::new(vec![
            Series::new(
                MEASUREMENT_VALUE.into(),
                vec!["50 ; g", "unknown ; unknown", "3,4 ; mm", "80 ; unknown"],
            )
            .into(),
        ])
        .unwrap();
        let out = split_value_unit(&df).unwrap();
        let out = drop_unusable_measurements(&out).unwrap();
        let out = assign_diagnostic_ids(&out).unwrap();

        assert_eq!(out.height(), 2);
        let values = out.column(MEASUREMENT_VALUE).unwrap().str().unwrap();
        assert_eq!(values.get(1), Some("80"));
        let units = out.column(VERBATIM_MEASUREMENT_UNIT).unwrap().str().unwrap();
        assert_eq!(units.get(0), Some("g"));
        assert_eq!(units.get(1), Some(""));
        let ids = out.column(DIAGNOSTIC_ID).unwrap().u64().unwrap();
        assert_eq!(ids.get(0), Some(0));
        assert_eq!(ids.get(1), Some(1));
    }

    #[test]
    fn blank_values_are_dropped() {
        let df = DataFrame::new(vec![
            Series::new(
                MEASUREMENT_VALUE.into(),
                vec![Some("  ; mm"), None, Some("7 ; g"), Some(" ")],
            )
            .into(),
        ])
        .unwrap();
        let out = split_value_unit(&df).unwrap();
        let out = drop_unusable_measurements(&out).unwrap();

        assert_eq!(out.height(), 1);
        let values = out.column(MEASUREMENT_VALUE).unwrap().str().unwrap();
        assert_eq!(values.get(0), Some("7"));
    }
}

//! Wide-to-long reshaping of the morphological measurements.
//!
//! The trait list is passed to every step explicitly:
//!
//! 1. [`prepare_measurements`] collapses each trait's four source columns into
//!    a combined `"<value> ; <unit>"` column plus a provenance label column.
//! 2. [`unpivot_measurements`] emits one row per (record, trait), trait-major.
//! 3. [`attach_measurement_method`] picks the label matching each row's trait.
//! 4. [`rename_measurement_types`] swaps trait keys for ontology terms.

use polars::prelude::{Column, DataFrame, DataType, NamedFrom, Series};

use geome_model::columns::{MEASUREMENT_METHOD, MEASUREMENT_TYPE, MEASUREMENT_VALUE};
use geome_model::{
    EXTRACTED_WITH_TRAITER, MeasurementMethod, TraitSpec, UNKNOWN_MEASUREMENT,
    VALUE_UNIT_SEPARATOR,
};

use crate::error::Result;
use crate::frame::{require_column, string_values, with_string_column, without_columns};

/// `"<value> ; <unit>"` with missing parts written as "unknown".
pub fn combine_value_unit(value: Option<&str>, unit: Option<&str>) -> String {
    format!(
        "{}{}{}",
        value.unwrap_or(UNKNOWN_MEASUREMENT),
        VALUE_UNIT_SEPARATOR,
        unit.unwrap_or(UNKNOWN_MEASUREMENT)
    )
}

/// Replace each trait's source columns with its combined and label columns.
pub fn prepare_measurements(df: &DataFrame, traits: &[TraitSpec]) -> Result<DataFrame> {
    let mut out = df.clone();
    for spec in traits {
        let inferred = string_values(&out, &spec.inferred_column())?;
        let estimated = string_values(&out, &spec.estimated_column())?;
        let labels: Vec<&str> = inferred
            .iter()
            .zip(&estimated)
            .map(|(inferred, estimated)| {
                MeasurementMethod::from_indicators(inferred.as_deref(), estimated.as_deref())
                    .label()
            })
            .collect();

        let values = string_values(&out, &spec.value_column())?;
        let units = string_values(&out, &spec.units_column())?;
        let combined: Vec<String> = values
            .iter()
            .zip(&units)
            .map(|(value, unit)| combine_value_unit(value.as_deref(), unit.as_deref()))
            .collect();

        out = with_string_column(&out, &spec.method_column(), labels)?;
        out = with_string_column(&out, spec.combined_column(), combined)?;
        out = without_columns(&out, &spec.source_columns())?;
    }
    Ok(out)
}

/// Melt the combined trait columns into `measurementType`/`measurementValue`.
///
/// Every other column is carried as an identifier, so N input rows become
/// `N * traits.len()` output rows: all rows for the first trait, then all
/// rows for the second, and so on.
pub fn unpivot_measurements(df: &DataFrame, traits: &[TraitSpec]) -> Result<DataFrame> {
    let value_columns: Vec<String> = traits
        .iter()
        .map(|spec| spec.combined_column().to_string())
        .collect();
    let ids = without_columns(df, &value_columns)?;

    let mut long: Option<DataFrame> = None;
    for spec in traits {
        let values = require_column(df, spec.combined_column())?
            .clone()
            .with_name(MEASUREMENT_VALUE.into());
        let mut block = ids.clone();
        block.with_column(Series::new(
            MEASUREMENT_TYPE.into(),
            vec![spec.key.as_str(); df.height()],
        ))?;
        block.with_column(values)?;
        match long.as_mut() {
            Some(acc) => {
                acc.vstack_mut(&block)?;
            }
            None => long = Some(block),
        }
    }

    match long {
        Some(long) => Ok(long),
        None => {
            let mut empty = ids.clear();
            empty.with_column(Series::new_empty(
                MEASUREMENT_TYPE.into(),
                &DataType::String,
            ))?;
            empty.with_column(Series::new_empty(
                MEASUREMENT_VALUE.into(),
                &DataType::String,
            ))?;
            Ok(empty)
        }
    }
}

/// Add `measurementMethod` from the label column of each row's trait and drop
/// the per-trait label columns.
///
/// Rows whose trait has no label default to "Extracted with Traiter".
pub fn attach_measurement_method(df: &DataFrame, traits: &[TraitSpec]) -> Result<DataFrame> {
    let types = string_values(df, MEASUREMENT_TYPE)?;
    let mut labels_by_trait: Vec<(&str, Vec<Option<String>>)> = Vec::with_capacity(traits.len());
    for spec in traits {
        let labels = match df.column(&spec.method_column()) {
            Ok(_) => string_values(df, &spec.method_column())?,
            Err(_) => vec![None; df.height()],
        };
        labels_by_trait.push((spec.key.as_str(), labels));
    }

    let methods: Vec<String> = types
        .iter()
        .enumerate()
        .map(|(row, kind)| {
            kind.as_deref()
                .and_then(|kind| {
                    labels_by_trait
                        .iter()
                        .find(|(key, _)| *key == kind)
                        .and_then(|(_, labels)| labels[row].clone())
                })
                .unwrap_or_else(|| EXTRACTED_WITH_TRAITER.to_string())
        })
        .collect();

    let method_columns: Vec<String> = traits.iter().map(TraitSpec::method_column).collect();
    let out = without_columns(df, &method_columns)?;
    with_string_column(&out, MEASUREMENT_METHOD, methods)
}

/// Replace trait keys in `measurementType` with their ontology terms.
pub fn rename_measurement_types(df: &DataFrame, traits: &[TraitSpec]) -> Result<DataFrame> {
    let types = string_values(df, MEASUREMENT_TYPE)?;
    let renamed: Vec<Option<String>> = types
        .into_iter()
        .map(|kind| {
            kind.map(|kind| {
                traits
                    .iter()
                    .find(|spec| spec.key == kind)
                    .map(|spec| spec.term.clone())
                    .unwrap_or(kind)
            })
        })
        .collect();
    let column: Column = Series::new(MEASUREMENT_TYPE.into(), renamed).into();
    let mut out = df.clone();
    out.with_column(column)?;
    Ok(out)
}

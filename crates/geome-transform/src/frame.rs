//! DataFrame helpers shared by the stage functions.
//!
//! Stages never mutate their input: each helper clones the (reference
//! counted) frame and returns the modified copy.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use geome_ingest::any_to_opt_string;

use crate::error::{Result, TransformError};

/// Look up a column, mapping absence to a schema error.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| TransformError::MissingColumn {
        column: name.to_string(),
    })
}

/// All values of a column as optional strings; nulls stay `None`.
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = require_column(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_opt_string(column.get(idx)?));
    }
    Ok(values)
}

/// Copy of `df` with `name` set to `values` (replaced in place or appended).
pub fn with_string_column<S>(df: &DataFrame, name: &str, values: Vec<S>) -> Result<DataFrame>
where
    Series: NamedFrom<Vec<S>, [S]>,
{
    let mut out = df.clone();
    out.with_column(Series::new(name.into(), values))?;
    Ok(out)
}

/// Copy of `df` with every value of `name` passed through `f`.
pub fn map_string_column<F>(df: &DataFrame, name: &str, f: F) -> Result<DataFrame>
where
    F: Fn(Option<&str>) -> String,
{
    let values: Vec<String> = string_values(df, name)?
        .iter()
        .map(|value| f(value.as_deref()))
        .collect();
    with_string_column(df, name, values)
}

/// Copy of `df` without the named columns. Unknown names are ignored.
pub fn without_columns(df: &DataFrame, drop: &[String]) -> Result<DataFrame> {
    let keep: Vec<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .filter(|name| !drop.iter().any(|d| d.as_str() == *name))
        .collect();
    Ok(df.select(keep)?)
}

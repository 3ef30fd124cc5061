//! Schema mapping: select the GEOME column set and rename to template terms.

use polars::prelude::{Column, DataFrame};

use geome_model::MappingConfig;

use crate::error::Result;
use crate::frame::require_column;

/// Keep the configured columns in configured order and apply the rename table.
///
/// A selected column missing from the table is a schema error; there is no
/// partial output.
pub fn map_schema(df: &DataFrame, config: &MappingConfig) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::new();
    for source in config.selected_columns() {
        let column = require_column(df, &source)?;
        let target = config.target_name(&source);
        columns.push(column.clone().with_name(target.into()));
    }
    let renamed = config
        .selected_columns()
        .iter()
        .filter(|source| config.target_name(source) != source.as_str())
        .count();
    tracing::debug!(selected = columns.len(), renamed, "mapped schema");
    Ok(DataFrame::new(columns)?)
}

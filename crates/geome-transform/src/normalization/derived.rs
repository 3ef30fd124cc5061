//! Columns GEOME needs that are copied, combined or constant.

use polars::prelude::DataFrame;

use geome_model::GeomeConstants;
use geome_model::columns::{
    BASIS_OF_RECORD, LOCALITY, MAX_ELEVATION_SOURCE, MIN_ELEVATION_SOURCE, SAMPLING_PROTOCOL,
    VERBATIM_ELEVATION, VERBATIM_EVENT_DATE, VERBATIM_EVENT_DATE_SOURCE, VERBATIM_LOCALITY,
};

use crate::error::Result;
use crate::frame::{require_column, string_values, with_string_column};

/// Add `samplingProtocol` and `basisOfRecord`, and overwrite `locality`.
///
/// `verbatimLocality` must already exist, otherwise the original locality
/// text would be lost.
pub fn add_geome_constants(df: &DataFrame, constants: &GeomeConstants) -> Result<DataFrame> {
    require_column(df, VERBATIM_LOCALITY)?;
    let rows = df.height();
    let out = with_string_column(
        df,
        SAMPLING_PROTOCOL,
        vec![constants.sampling_protocol.as_str(); rows],
    )?;
    let out = with_string_column(
        &out,
        BASIS_OF_RECORD,
        vec![constants.basis_of_record.as_str(); rows],
    )?;
    with_string_column(&out, LOCALITY, vec![constants.locality.as_str(); rows])
}

/// Copy `verbatimeventdate` into the GEOME `verbatimEventDate` term.
pub fn copy_verbatim_event_date(df: &DataFrame) -> Result<DataFrame> {
    let dates = string_values(df, VERBATIM_EVENT_DATE_SOURCE)?;
    with_string_column(df, VERBATIM_EVENT_DATE, dates)
}

/// `"<max>,<min>"` with `missing` standing in for absent values.
pub fn verbatim_elevation(max: Option<&str>, min: Option<&str>, missing: &str) -> String {
    format!("{},{}", max.unwrap_or(missing), min.unwrap_or(missing))
}

pub fn combine_elevation(df: &DataFrame, missing: &str) -> Result<DataFrame> {
    let max = string_values(df, MAX_ELEVATION_SOURCE)?;
    let min = string_values(df, MIN_ELEVATION_SOURCE)?;
    let combined: Vec<String> = max
        .iter()
        .zip(&min)
        .map(|(max, min)| verbatim_elevation(max.as_deref(), min.as_deref(), missing))
        .collect();
    with_string_column(df, VERBATIM_ELEVATION, combined)
}

#[cfg(test)]
mod tests {
    use polars::prelude::{NamedFrom, Series};

    use crate::error::TransformError;

    use super::*;

    fn constants() -> GeomeConstants {
        GeomeConstants {
            sampling_protocol: "Unknown".to_string(),
            basis_of_record: "PreservedSpecimen".to_string(),
            locality: "Unknown".to_string(),
            missing_elevation: "nan".to_string(),
        }
    }

    #[test]
    fn constants_replace_locality() {
        let df = DataFrame::new(vec![
            Series::new(LOCALITY.into(), vec!["Ann Arbor"]).into(),
            Series::new(VERBATIM_LOCALITY.into(), vec!["Ann Arbor,USA"]).into(),
        ])
        .unwrap();
        let out = add_geome_constants(&df, &constants()).unwrap();
        let get = |name: &str| {
            out.column(name)
                .unwrap()
                .str()
                .unwrap()
                .get(0)
                .map(str::to_string)
        };
        assert_eq!(get(LOCALITY).as_deref(), Some("Unknown"));
        assert_eq!(get(VERBATIM_LOCALITY).as_deref(), Some("Ann Arbor,USA"));
        assert_eq!(get(BASIS_OF_RECORD).as_deref(), Some("PreservedSpecimen"));
        assert_eq!(get(SAMPLING_PROTOCOL).as_deref(), Some("Unknown"));
    }

    #[test]
    fn constants_require_verbatim_locality() {
        let df = DataFrame::new(vec![Series::new(LOCALITY.into(), vec!["x"]).into()]).unwrap();
        let result = add_geome_constants(&df, &constants());
        assert!(matches!(result, Err(TransformError::MissingColumn { .. })));
    }

    #[test]
    fn elevation_uses_placeholder() {
        let df = DataFrame::new(vec![
            Series::new(MAX_ELEVATION_SOURCE.into(), vec![Some("1200"), None]).into(),
            Series::new(MIN_ELEVATION_SOURCE.into(), vec![Some("1100"), Some("30")]).into(),
        ])
        .unwrap();
        let out = combine_elevation(&df, "nan").unwrap();
        let elevation = out.column(VERBATIM_ELEVATION).unwrap().str().unwrap();
        assert_eq!(elevation.get(0), Some("1200,1100"));
        assert_eq!(elevation.get(1), Some("nan,30"));
    }

    #[test]
    fn verbatim_event_date_is_copied() {
        let df = DataFrame::new(vec![
            Series::new(VERBATIM_EVENT_DATE_SOURCE.into(), vec![Some("3 Mar 1995"), None])
                .into(),
        ])
        .unwrap();
        let out = copy_verbatim_event_date(&df).unwrap();
        let dates = out.column(VERBATIM_EVENT_DATE).unwrap().str().unwrap();
        assert_eq!(dates.get(0), Some("3 Mar 1995"));
        assert_eq!(dates.get(1), None);
    }
}

//! VertNet occurrence transformation stages.
//!
//! Every stage takes an immutable `&DataFrame` and returns a new one:
//!
//! - **identity**: `individualID`, `materialSampleID` / `eventID`
//! - **normalization**: year, categorical, country and derived GEOME fields
//! - **schema**: column selection and GEOME renaming
//! - **reshape**: wide-to-long measurement unpivot with provenance labels
//! - **measurement**: value/unit split, filtering, `diagnosticID`

pub mod context;
pub mod error;
pub mod frame;
pub mod identity;
pub mod measurement;
pub mod normalization;
pub mod reshape;
pub mod schema;

pub use context::TransformContext;
pub use error::{Result, TransformError};
pub use identity::{
    IdProvider, SequentialIdProvider, UuidIdProvider, assign_individual_ids, assign_sample_ids,
};
pub use measurement::{assign_diagnostic_ids, drop_unusable_measurements, split_value_unit};
pub use reshape::{
    attach_measurement_method, prepare_measurements, rename_measurement_types,
    unpivot_measurements,
};
pub use schema::map_schema;

#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod paths;

pub use crate::error::{Result, StandardsError};
pub use crate::loader::{
    load_country_aliases, load_country_list, load_default_mapping_standards,
    load_mapping_config, load_mapping_standards,
};
pub use crate::paths::{STANDARDS_ENV_VAR, standards_root};

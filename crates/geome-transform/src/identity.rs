//! Record identity assignment.
//!
//! `individualID` is assigned once per source row right after loading.
//! `materialSampleID` is assigned after schema mapping from an independent
//! token stream and copied into `eventID`.

use polars::prelude::DataFrame;
use uuid::Uuid;

use geome_model::columns::{EVENT_ID, INDIVIDUAL_ID, MATERIAL_SAMPLE_ID};

use crate::error::Result;
use crate::frame::with_string_column;

/// Source of unique record tokens.
pub trait IdProvider {
    fn next_id(&mut self) -> String;
}

/// Random 128-bit tokens rendered as 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic `<prefix><n>` tokens for reproducible runs and tests.
#[derive(Debug, Clone)]
pub struct SequentialIdProvider {
    prefix: String,
    next: u64,
}

impl SequentialIdProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdProvider for SequentialIdProvider {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

fn draw_ids(ids: &mut dyn IdProvider, count: usize) -> Vec<String> {
    (0..count).map(|_| ids.next_id()).collect()
}

/// Add `individualID`, one token per row.
pub fn assign_individual_ids(df: &DataFrame, ids: &mut dyn IdProvider) -> Result<DataFrame> {
    let values = draw_ids(ids, df.height());
    with_string_column(df, INDIVIDUAL_ID, values)
}

/// Add `materialSampleID` and an `eventID` holding the same token.
pub fn assign_sample_ids(df: &DataFrame, ids: &mut dyn IdProvider) -> Result<DataFrame> {
    let values = draw_ids(ids, df.height());
    let out = with_string_column(df, MATERIAL_SAMPLE_ID, values.clone())?;
    with_string_column(&out, EVENT_ID, values)
}

//! Mapping pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: read the VertNet export and check the input column contract
//! 2. **Normalize**: `individualID`, year, categorical, country and derived fields
//! 3. **Map schema**: select and rename to GEOME terms, add sample identifiers
//! 4. **Reshape**: unpivot the measurement traits to one row per (record, trait)
//! 5. **Finalize**: split value/unit, drop unusable rows, number `diagnosticID`
//! 6. **Output**: write the chunked CSVs
//!
//! Each stage takes the previous stage's table by reference and returns a new one.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use geome_ingest::{read_occurrence_table, validate_required_columns};
use geome_output::{ChunkFile, ChunkOptions, plan_chunks, write_chunks};
use geome_transform::normalization::{
    add_geome_constants, clean_country, clean_life_stage, clean_scientific_name, clean_sex,
    clean_year_collected, combine_elevation, copy_verbatim_event_date,
};
use geome_transform::{
    IdProvider, TransformContext, assign_diagnostic_ids, assign_individual_ids,
    assign_sample_ids, attach_measurement_method, drop_unusable_measurements, map_schema,
    prepare_measurements, rename_measurement_types, split_value_unit, unpivot_measurements,
};

use crate::types::RunSummary;

/// Everything one run needs besides the transform context.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: ChunkOptions,
    pub dry_run: bool,
}

/// The mapped table together with its run summary.
#[derive(Debug)]
pub struct PipelineResult {
    pub table: DataFrame,
    pub summary: RunSummary,
}

/// Run `f` inside a span named after the stage and log its row count and timing.
fn run_stage<F>(stage: &'static str, f: F) -> Result<DataFrame>
where
    F: FnOnce() -> Result<DataFrame>,
{
    info_span!("stage", stage).in_scope(|| -> Result<DataFrame> {
        let start = Instant::now();
        let df = f()?;
        info!(
            rows = df.height(),
            columns = df.width(),
            duration_ms = start.elapsed().as_millis(),
            "{stage} complete"
        );
        Ok(df)
    })
}

/// Stage 1: read the export and fail on missing required columns.
pub fn load(path: &Path, context: &TransformContext) -> Result<DataFrame> {
    run_stage("load", || {
        let df = read_occurrence_table(path).with_context(|| format!("read {}", path.display()))?;
        validate_required_columns(&df, &context.required_source_columns(), path)
            .context("check input columns")?;
        Ok(df)
    })
}

/// Stage 2: identity plus every field normalizer, in dependency order.
///
/// `verbatimLocality` is captured before `locality` is overwritten with the
/// GEOME constant.
pub fn normalize(
    df: &DataFrame,
    context: &TransformContext,
    ids: &mut dyn IdProvider,
) -> Result<DataFrame> {
    run_stage("normalize", || {
        let out = assign_individual_ids(df, ids).context("assign individualID")?;
        let out = clean_year_collected(&out, &context.years).context("extract yearCollected")?;
        let out = clean_life_stage(&out).context("normalize life stage")?;
        let out = clean_sex(&out).context("normalize sex")?;
        let out = clean_scientific_name(&out).context("normalize scientific name")?;
        let out = clean_country(&out, &context.countries).context("normalize country")?;
        let out = combine_elevation(&out, &context.constants().missing_elevation)
            .context("combine elevation")?;
        let out = copy_verbatim_event_date(&out).context("copy verbatimEventDate")?;
        let out = add_geome_constants(&out, context.constants()).context("add GEOME constants")?;
        Ok(out)
    })
}

/// Stage 3: GEOME column set, then `materialSampleID` / `eventID`.
pub fn map_columns(
    df: &DataFrame,
    context: &TransformContext,
    ids: &mut dyn IdProvider,
) -> Result<DataFrame> {
    run_stage("map_schema", || {
        let out = map_schema(df, &context.config).context("map GEOME schema")?;
        let out = assign_sample_ids(&out, ids).context("assign materialSampleID")?;
        Ok(out)
    })
}

/// Stage 4: one row per (record, trait) with `measurementMethod` attached.
pub fn reshape(df: &DataFrame, context: &TransformContext) -> Result<DataFrame> {
    let traits = context.traits();
    run_stage("reshape", || {
        let out = prepare_measurements(df, traits).context("prepare measurements")?;
        let out = unpivot_measurements(&out, traits).context("unpivot measurements")?;
        let out = attach_measurement_method(&out, traits).context("attach measurementMethod")?;
        let out = rename_measurement_types(&out, traits).context("rename measurementType")?;
        Ok(out)
    })
}

/// Stage 5: value/unit split, filter and `diagnosticID`.
pub fn finalize(df: &DataFrame) -> Result<DataFrame> {
    run_stage("finalize", || {
        let out = split_value_unit(df).context("split value and unit")?;
        let out = drop_unusable_measurements(&out).context("drop unusable measurements")?;
        let out = assign_diagnostic_ids(&out).context("assign diagnosticID")?;
        Ok(out)
    })
}

/// Stage 6: write (or, on a dry run, only plan) the chunk files.
pub fn output(df: &DataFrame, options: &ChunkOptions, dry_run: bool) -> Result<Vec<ChunkFile>> {
    info_span!("stage", stage = "output").in_scope(|| -> Result<Vec<ChunkFile>> {
        let start = Instant::now();
        let chunks = if dry_run {
            plan_chunks(df, options).context("plan output chunks")?
        } else {
            write_chunks(df, options)
                .with_context(|| format!("write chunks to {}", options.output_dir.display()))?
        };
        info!(
            rows = df.height(),
            files = chunks.len(),
            dry_run,
            duration_ms = start.elapsed().as_millis(),
            "output complete"
        );
        Ok(chunks)
    })
}

/// Run every stage over one export.
pub fn run_pipeline(
    config: &PipelineConfig,
    context: &TransformContext,
    ids: &mut dyn IdProvider,
) -> Result<PipelineResult> {
    let span = info_span!("map", input = %config.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let loaded = load(&config.input, context)?;
    let normalized = normalize(&loaded, context, ids)?;
    let mapped = map_columns(&normalized, context, ids)?;
    let long = reshape(&mapped, context)?;
    let table = finalize(&long)?;
    let chunks = output(&table, &config.output, config.dry_run)?;

    let summary = RunSummary {
        input: config.input.clone(),
        output_dir: config.output.output_dir.clone(),
        input_rows: loaded.height(),
        long_rows: long.height(),
        final_rows: table.height(),
        dropped_rows: long.height() - table.height(),
        chunks,
        dry_run: config.dry_run,
    };
    info!(
        input_rows = summary.input_rows,
        long_rows = summary.long_rows,
        final_rows = summary.final_rows,
        dropped_rows = summary.dropped_rows,
        duration_ms = start.elapsed().as_millis(),
        "mapping complete"
    );
    Ok(PipelineResult { table, summary })
}

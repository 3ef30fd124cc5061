use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::info_span;

use geome_model::MappingStandards;
use geome_output::ChunkOptions;
use geome_standards::{load_default_mapping_standards, load_mapping_standards};
use geome_transform::{TransformContext, UuidIdProvider};

use geome_cli::pipeline::{PipelineConfig, run_pipeline};
use geome_cli::types::RunSummary;

use crate::cli::{MapArgs, SchemaArgs};
use crate::summary::apply_table_style;

fn load_standards(dir: Option<&Path>) -> Result<MappingStandards> {
    match dir {
        Some(dir) => load_mapping_standards(dir)
            .with_context(|| format!("load standards from {}", dir.display())),
        None => load_default_mapping_standards().context("load standards"),
    }
}

pub fn run_map(args: &MapArgs) -> Result<RunSummary> {
    let span = info_span!("run_map", input = %args.file.display());
    let _guard = span.enter();

    let standards = load_standards(args.standards_dir.as_deref())?;
    let chunk_count = args.chunks.unwrap_or(standards.config.output.chunk_count);
    if chunk_count == 0 {
        bail!("--chunks must be at least 1");
    }
    let file_prefix = args
        .prefix
        .clone()
        .unwrap_or_else(|| standards.config.output.file_prefix.clone());
    let context = TransformContext::new(standards).context("build transform context")?;

    let config = PipelineConfig {
        input: args.file.clone(),
        output: ChunkOptions {
            output_dir: args.output.clone(),
            file_prefix,
            chunk_count,
        },
        dry_run: args.dry_run,
    };
    let result = run_pipeline(&config, &context, &mut UuidIdProvider)?;
    Ok(result.summary)
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let standards = load_standards(args.standards_dir.as_deref())?;
    let config = &standards.config;

    let mut required = Table::new();
    required.set_header(vec!["Required input column"]);
    apply_table_style(&mut required);
    for column in config.required_source_columns() {
        required.add_row(vec![column]);
    }
    println!("{required}");

    let mut columns = Table::new();
    columns.set_header(vec!["Source column", "GEOME column"]);
    apply_table_style(&mut columns);
    for column in config.selected_columns() {
        let target = config.target_name(&column).to_string();
        columns.add_row(vec![column, target]);
    }
    println!("{columns}");

    let mut traits = Table::new();
    traits.set_header(vec!["Trait", "measurementType"]);
    apply_table_style(&mut traits);
    for spec in &config.traits {
        traits.add_row(vec![spec.key.clone(), spec.term.clone()]);
    }
    println!("{traits}");
    println!(
        "Countries: {} accepted, {} aliases",
        standards.countries.accepted_count(),
        standards.countries.alias_count()
    );
    Ok(())
}

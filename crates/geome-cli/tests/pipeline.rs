//! End-to-end tests for the mapping pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tempfile::TempDir;

use geome_cli::pipeline::{PipelineConfig, load, normalize, run_pipeline};
use geome_output::ChunkOptions;
use geome_standards::load_mapping_standards;
use geome_transform::{SequentialIdProvider, TransformContext};

const TRAITS: [&str; 5] = [
    "body_mass",
    "ear_length",
    "hind_foot_length",
    "tail_length",
    "total_length",
];

fn context() -> TransformContext {
    let root = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../standards"));
    let standards = load_mapping_standards(root).expect("load standards");
    TransformContext::new(standards).expect("build context")
}

fn header() -> Vec<String> {
    let mut columns: Vec<String> = [
        "catalognumber",
        "collectioncode",
        "decimallatitude",
        "decimallongitude",
        "maximumelevationinmeters",
        "minimumelevationinmeters",
        "institutioncode",
        "eventdate",
        "verbatimeventdate",
        "occurrenceremarks",
        "occurrenceid",
        "verbatimlongitude",
        "verbatimlatitude",
        "locality",
        "sex",
        "country",
        "lifestage_cor",
        "binomial",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();
    for key in TRAITS {
        for suffix in ["value", "units", "units_inferred", "estimated_value"] {
            columns.push(format!("{key}.{suffix}"));
        }
    }
    columns
}

/// One CSV row; `traits` gives (key, value, units, inferred, estimated) overrides.
fn row(base: [&str; 18], traits: &[(&str, &str, &str, &str, &str)]) -> String {
    let mut cells: Vec<String> = base.iter().map(|c| c.to_string()).collect();
    for key in TRAITS {
        match traits.iter().find(|t| t.0 == key) {
            Some((_, value, units, inferred, estimated)) => {
                cells.extend([value, units, inferred, estimated].map(|c| c.to_string()));
            }
            None => cells.extend(std::iter::repeat_n(String::new(), 4)),
        }
    }
    cells
        .iter()
        .map(|cell| {
            if cell.contains(',') {
                format!("\"{cell}\"")
            } else {
                cell.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn write_input(dir: &Path) -> PathBuf {
    let rows = [
        row(
            [
                "MVZ-1", "Mamm", "42.28", "-83.74", "", "", "MVZ", "1995-03-04", "4 Mar 1995", "",
                "urn:1", "", "", "Ann Arbor", "female", "United States", "Adult",
                "Peromyscus maniculatus",
            ],
            &[("body_mass", "50", "g", "TRUE", "")],
        ),
        row(
            [
                "MVZ-2", "Mamm", "", "", "1200", "1100", "MVZ", "unknown", "", "", "urn:2", "",
                "", "", "male", "Wakanda", "NS", "",
            ],
            &[],
        ),
        row(
            [
                "MVZ-3", "Mamm", "", "", "", "", "MVZ", "March 1890", "", "", "urn:3", "", "",
                "Base camp", "?", "Canada", "Juvenile", "Sorex cinereus",
            ],
            &[
                ("tail_length", "12, 14", "mm", "", ""),
                ("total_length", "150", "mm", "", "True"),
                ("ear_length", "", "mm", "TRUE", "TRUE"),
            ],
        ),
    ];
    let mut content = header().join(",");
    content.push('\n');
    for line in rows {
        content.push_str(&line);
        content.push('\n');
    }
    let path = dir.join("all_mammals.csv");
    fs::write(&path, content).expect("write input");
    path
}

fn config(dir: &Path, input: PathBuf, chunk_count: usize, dry_run: bool) -> PipelineConfig {
    PipelineConfig {
        input,
        output: ChunkOptions {
            output_dir: dir.join("Mapped_Data"),
            file_prefix: "FuTRES_Mammals_VertNet_Global_Modern_".to_string(),
            chunk_count,
        },
        dry_run,
    }
}

fn str_at(df: &DataFrame, name: &str, row: usize) -> Option<String> {
    df.column(name)
        .expect("column")
        .str()
        .expect("string column")
        .get(row)
        .map(str::to_string)
}

#[test]
fn maps_vertnet_rows_to_geome_long_format() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path());
    let mut ids = SequentialIdProvider::new("id-");

    let result = run_pipeline(&config(dir.path(), input, 13, false), &context(), &mut ids)
        .expect("pipeline");
    let summary = &result.summary;
    let table = &result.table;

    assert_eq!(summary.input_rows, 3);
    assert_eq!(summary.long_rows, 3 * 5);
    assert_eq!(summary.final_rows, 2);
    assert_eq!(summary.dropped_rows, 13);
    assert_eq!(summary.chunk_rows(), 2);
    assert_eq!(summary.chunks.len(), 13);

    // body mass of row 1 comes first (trait-major order).
    assert_eq!(str_at(table, "measurementType", 0).as_deref(), Some("body mass"));
    assert_eq!(str_at(table, "measurementValue", 0).as_deref(), Some("50"));
    assert_eq!(str_at(table, "verbatimMeasurementUnit", 0).as_deref(), Some("g"));
    assert_eq!(
        str_at(table, "measurementMethod", 0).as_deref(),
        Some("Extracted with Traiter ; inferred value")
    );
    assert_eq!(str_at(table, "individualID", 0).as_deref(), Some("id-0"));
    assert_eq!(str_at(table, "materialSampleID", 0).as_deref(), Some("id-3"));
    assert_eq!(str_at(table, "eventID", 0).as_deref(), Some("id-3"));
    assert_eq!(str_at(table, "country", 0).as_deref(), Some("USA"));
    assert_eq!(
        str_at(table, "verbatimLocality", 0).as_deref(),
        Some("Ann Arbor,United States")
    );
    assert_eq!(str_at(table, "locality", 0).as_deref(), Some("Unknown"));
    assert_eq!(str_at(table, "yearCollected", 0).as_deref(), Some("1995"));
    assert_eq!(str_at(table, "lifeStage", 0).as_deref(), Some("adult"));
    assert_eq!(str_at(table, "verbatimElevation", 0).as_deref(), Some("nan,nan"));
    assert_eq!(str_at(table, "verbatimEventDate", 0).as_deref(), Some("4 Mar 1995"));

    assert_eq!(str_at(table, "measurementType", 1).as_deref(), Some("body length"));
    assert_eq!(str_at(table, "measurementValue", 1).as_deref(), Some("150"));
    assert_eq!(
        str_at(table, "measurementMethod", 1).as_deref(),
        Some("Extracted with Traiter ; estimated value")
    );
    assert_eq!(str_at(table, "sex", 1).as_deref(), Some(""));
    assert_eq!(str_at(table, "yearCollected", 1).as_deref(), Some("1890"));
    assert_eq!(str_at(table, "scientificName", 1).as_deref(), Some("Sorex cinereus"));

    let diagnostic = table.column("diagnosticID").unwrap().u64().unwrap();
    assert_eq!(diagnostic.get(0), Some(0));
    assert_eq!(diagnostic.get(1), Some(1));

    for name in ["body_mass", "measurementMethod_body_mass", "body_mass.value"] {
        assert!(table.column(name).is_err(), "{name} should be gone");
    }

    let first = fs::read_to_string(&summary.chunks[0].path).unwrap();
    assert_eq!(first.lines().count(), 2);
    assert!(first.starts_with("catalogNumber,collectionCode,decimalLatitude,individualID"));
    let second = fs::read_to_string(&summary.chunks[1].path).unwrap();
    assert!(second.contains("body length"));
}

#[test]
fn normalizers_fill_sentinels() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path());
    let context = context();
    let mut ids = SequentialIdProvider::new("id-");

    let loaded = load(&input, &context).unwrap();
    let normalized = normalize(&loaded, &context, &mut ids).unwrap();

    assert_eq!(str_at(&normalized, "yearCollected", 1).as_deref(), Some("Unknown"));
    assert_eq!(str_at(&normalized, "country", 1).as_deref(), Some("Unknown"));
    assert_eq!(str_at(&normalized, "lifestage_cor", 1).as_deref(), Some("Not Collected"));
    assert_eq!(str_at(&normalized, "binomial", 1).as_deref(), Some("Unknown"));
    assert_eq!(
        str_at(&normalized, "verbatimElevation", 1).as_deref(),
        Some("1200,1100")
    );
    assert_eq!(str_at(&normalized, "verbatimLocality", 1).as_deref(), Some(",Wakanda"));
    assert_eq!(str_at(&normalized, "samplingProtocol", 2).as_deref(), Some("Unknown"));
    assert_eq!(
        str_at(&normalized, "basisOfRecord", 2).as_deref(),
        Some("PreservedSpecimen")
    );
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path());
    let mut ids = SequentialIdProvider::new("id-");

    let result = run_pipeline(&config(dir.path(), input, 2, true), &context(), &mut ids)
        .expect("pipeline");

    assert_eq!(result.summary.chunks.len(), 2);
    assert_eq!(result.summary.chunk_rows(), result.summary.final_rows);
    assert!(!dir.path().join("Mapped_Data").exists());
}

#[test]
fn missing_required_column_aborts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(&path, "catalognumber,eventdate\nMVZ-1,1995\n").unwrap();
    let mut ids = SequentialIdProvider::new("id-");

    let error = run_pipeline(&config(dir.path(), path, 13, false), &context(), &mut ids)
        .expect_err("schema error");
    let message = format!("{error:#}");
    assert!(message.contains("missing required columns"));
    assert!(message.contains("collectioncode"));
    assert!(!dir.path().join("Mapped_Data").exists());
}

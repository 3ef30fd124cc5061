//! Loaders for the mapping configuration and the GEOME country vocabulary.
//!
//! Everything here is read once at startup; the pipeline never goes back to
//! disk for reference data.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use geome_model::{CountryVocabulary, MappingConfig, MappingStandards};

use crate::error::{Result, StandardsError};
use crate::paths::{country_aliases_path, country_list_path, mapping_path, standards_root};

const COUNTRY_COLUMN: &str = "country";
const ALIAS_COLUMN: &str = "alias";

/// Load mapping config and country vocabulary from the default standards root.
pub fn load_default_mapping_standards() -> Result<MappingStandards> {
    load_mapping_standards(&standards_root())
}

/// Load mapping config and country vocabulary from `root`.
pub fn load_mapping_standards(root: &Path) -> Result<MappingStandards> {
    let config = load_mapping_config(&mapping_path(root))?;
    let accepted = load_country_list(&country_list_path(root))?;
    let aliases = load_country_aliases(&country_aliases_path(root))?;
    debug!(
        root = %root.display(),
        traits = config.traits.len(),
        accepted_countries = accepted.len(),
        country_aliases = aliases.len(),
        "loaded mapping standards"
    );
    Ok(MappingStandards {
        config,
        countries: CountryVocabulary::new(accepted, aliases),
    })
}

pub fn load_mapping_config(path: &Path) -> Result<MappingConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let config: MappingConfig = toml::from_str(&text).map_err(|source| StandardsError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    validate_mapping_config(&config, path)?;
    Ok(config)
}

fn validate_mapping_config(config: &MappingConfig, path: &Path) -> Result<()> {
    let invalid = |message: String| StandardsError::InvalidMapping {
        path: path.to_path_buf(),
        message,
    };
    if config.output.chunk_count == 0 {
        return Err(invalid("output.chunk_count must be at least 1".to_string()));
    }
    if config.traits.is_empty() {
        return Err(invalid("at least one [[traits]] entry is required".to_string()));
    }
    let mut keys = BTreeSet::new();
    for spec in &config.traits {
        if spec.key.trim().is_empty() || spec.term.trim().is_empty() {
            return Err(invalid("trait key and term must not be empty".to_string()));
        }
        if !keys.insert(spec.key.as_str()) {
            return Err(invalid(format!("duplicate trait key '{}'", spec.key)));
        }
    }
    let mut targets = BTreeSet::new();
    for column in &config.schema.selected_columns {
        let target = config.target_name(column);
        if !targets.insert(target) {
            return Err(invalid(format!("duplicate target column '{target}'")));
        }
    }
    Ok(())
}

/// Read the accepted GEOME country names (the `country` column).
pub fn load_country_list(path: &Path) -> Result<BTreeSet<String>> {
    let rows = read_csv_rows(path)?;
    let mut countries = BTreeSet::new();
    for row in rows {
        let Some(country) = row.get(COUNTRY_COLUMN) else {
            return Err(StandardsError::MissingColumn {
                column: COUNTRY_COLUMN.to_string(),
                path: path.to_path_buf(),
            });
        };
        if !country.is_empty() {
            countries.insert(country.clone());
        }
    }
    Ok(countries)
}

/// Read the VertNet spelling variants (`alias` -> `country`).
pub fn load_country_aliases(path: &Path) -> Result<BTreeMap<String, String>> {
    let rows = read_csv_rows(path)?;
    let mut aliases = BTreeMap::new();
    for row in rows {
        let (Some(alias), Some(country)) = (row.get(ALIAS_COLUMN), row.get(COUNTRY_COLUMN))
        else {
            return Err(StandardsError::MissingColumn {
                column: format!("{ALIAS_COLUMN}/{COUNTRY_COLUMN}"),
                path: path.to_path_buf(),
            });
        };
        if alias.is_empty() || country.is_empty() {
            continue;
        }
        aliases.insert(alias.clone(), country.clone());
    }
    Ok(aliases)
}

fn read_csv_rows(path: &Path) -> Result<Vec<BTreeMap<String, String>>> {
    let file = File::open(path).map_err(|e| StandardsError::io(path, e))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, &e))?
        .clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| StandardsError::csv(path, &e))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers
                .get(idx)
                .unwrap_or("")
                .trim_matches('\u{feff}')
                .to_string();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

//! IO module for format-specific reading and writing operations.
//!
//! Each format module handles reading and writing for a specific file format.
//! The public functions below are the entry points used by the command line tool.
//!
//! # Format Modules
//!
//! - `csv` - population tables, respondent tables, overlay pieces and the output table
//! - `json` - apportionment reports, weight maps and config files
//! - `geojson` - district catalogues
//! - `fs` - directory helpers

pub(crate) mod csv;
pub(crate) mod fs;
pub(crate) mod geojson;
pub(crate) mod json;

pub(crate) use json::{read_json, write_json};
pub use json::{read_weight_map, write_weight_map};

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    config::RespondentColumns,
    tally::{OutputRow, RespondentRecord},
    types::Jurisdiction,
    weights::PopulationPiece,
};

/// Read the jurisdiction population table (`State`, `Population`) from a CSV file.
pub fn read_jurisdictions(path: &Path) -> Result<Vec<Jurisdiction>> {
    let df = csv::read_csv(path)?;
    csv::read_jurisdictions(&df)
        .with_context(|| format!("[io] Failed to read populations from {}", path.display()))
}

/// Read respondent records from a CSV file.
pub fn read_respondents(path: &Path, columns: &RespondentColumns) -> Result<Vec<RespondentRecord>> {
    let df = csv::read_csv(path)?;
    csv::read_respondents(&df, columns)
        .with_context(|| format!("[io] Failed to read respondents from {}", path.display()))
}

/// Read geography/district overlay pieces from a CSV file.
pub fn read_population_pieces(path: &Path) -> Result<Vec<PopulationPiece>> {
    let df = csv::read_csv(path)?;
    csv::read_population_pieces(&df)
        .with_context(|| format!("[io] Failed to read overlay pieces from {}", path.display()))
}

/// Write the output table, creating the parent directory if needed.
pub fn write_output(rows: &[OutputRow], path: &Path) -> Result<()> {
    fs::ensure_parent_exists(path)?;
    csv::write_output_rows(rows, path)
}

/// Write any serializable value as JSON, creating the parent directory if needed.
pub fn write_json_file<T: serde::Serialize>(value: &T, path: &Path) -> Result<()> {
    fs::ensure_parent_exists(path)?;
    write_json(path, value)
}

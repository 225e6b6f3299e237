use std::{fs::File, io::{BufReader, BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};

use crate::{apportion::ApportionmentReport, weights::RawWeightMap};

/// Reads a JSON value from the file at `path`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("[io::json] Failed to read JSON file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::json] Failed to parse JSON file: {}", path.display()))
}

/// Writes `value` as indented JSON to the file at `path`.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::json] Failed to create JSON file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("[io::json] Failed to write JSON to {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

impl ApportionmentReport {
    /// Load a report written by `write_to_json`, or any array of rows in the same layout.
    pub fn read_from_json(path: &Path) -> Result<Self> { read_json(path) }

    /// Write the report as a JSON array of rows followed by the total row.
    pub fn write_to_json(&self, path: &Path) -> Result<()> {
        super::fs::ensure_parent_exists(path)?;
        write_json(path, self)
    }
}

/// Load a geography → district weight map.
pub fn read_weight_map(path: &Path) -> Result<RawWeightMap> { read_json(path) }

/// Write a geography → district weight map.
pub fn write_weight_map(map: &RawWeightMap, path: &Path) -> Result<()> {
    super::fs::ensure_parent_exists(path)?;
    write_json(path, map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apportion::apportion, types::Jurisdiction};

    #[test]
    fn report_file_keeps_rows_and_total() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/report.json");
        let report = apportion(&[Jurisdiction::new("Ohio", 300), Jurisdiction::new("Utah", 100)], 8, 6).unwrap();
        report.write_to_json(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"State\": \"Total\""));
        assert_eq!(ApportionmentReport::read_from_json(&path).unwrap(), report);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_json::<RawWeightMap>(Path::new("/nonexistent/weights.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/weights.json"));
    }
}

//! CSV writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::tally::OutputRow;

/// Write a DataFrame to a CSV file.
pub(crate) fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
}

/// Write a DataFrame to a CSV string.
#[cfg(test)]
pub(crate) fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .finish(df)
        .context("[io::csv::write] Failed to write CSV to string")?;
    String::from_utf8(buffer)
        .context("[io::csv::write] CSV output is not valid UTF-8")
}

/// Build the output table: district, representatives, affiliation, votes.
pub(crate) fn output_frame(rows: &[OutputRow]) -> Result<DataFrame> {
    let districts: Vec<String> = rows.iter().map(|r| r.district.to_string()).collect();
    let representatives: Vec<Option<u32>> = rows.iter().map(|r| r.representatives).collect();
    let affiliations: Vec<&str> = rows.iter().map(|r| r.affiliation.as_str()).collect();
    let votes: Vec<f64> = rows.iter().map(|r| r.votes).collect();

    let df = DataFrame::new(vec![
        Series::new("district".into(), districts).into(),
        Series::new("representatives".into(), representatives).into(),
        Series::new("affiliation".into(), affiliations).into(),
        Series::new("votes".into(), votes).into(),
    ])?;
    Ok(df)
}

/// Write the output table to a CSV file.
pub(crate) fn write_output_rows(rows: &[OutputRow], path: &Path) -> Result<()> {
    let mut df = output_frame(rows)?;
    write_csv(&mut df, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DistrictKey;

    #[test]
    fn output_table_layout() {
        let rows = [
            OutputRow { district: DistrictKey::numbered("CA", 1), representatives: Some(6), affiliation: "patriot".into(), votes: 0.5 },
            OutputRow { district: DistrictKey::numbered("CA", 2), representatives: None, affiliation: "patriot".into(), votes: 0.0 },
        ];
        let csv = write_csv_string(&mut output_frame(&rows).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "district,representatives,affiliation,votes");
        assert!(lines[1].starts_with("CA-1,6,patriot,0.5"));
        assert!(lines[2].starts_with("CA-2,,patriot,0"));
    }
}

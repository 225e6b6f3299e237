//! CSV reading operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result, bail};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, DataType}};

use crate::{
    config::RespondentColumns,
    tally::RespondentRecord,
    types::{DistrictKey, Jurisdiction},
    weights::{PopulationPiece, RawDistrictId},
};

/// Reads a CSV file from `path` into a DataFrame with every column kept as text,
/// so zip codes and ids keep their leading zeros.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads CSV text into an all-text DataFrame.
#[cfg(test)]
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(std::io::Cursor::new(csv.as_bytes().to_vec()))
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")
}

/// Values of column `name` as optional strings.
fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)
        .with_context(|| format!("[io::csv::read] CSV has no '{name}' column"))?
        .cast(&DataType::String)?;
    Ok(column.str()?.into_iter().map(|v| v.map(|s| s.trim().to_string())).collect())
}

/// Parse a count such as "39,538,223".
fn parse_count(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| !matches!(c, ',' | '_' | ' ')).collect();
    digits.parse::<u64>().ok()
        .or_else(|| digits.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0).map(|v| v.round() as u64))
}

/// Parse a (possibly fractional) population such as "1,234.5".
fn parse_population(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(|c| !matches!(c, ',' | '_' | ' ')).collect();
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Read the jurisdiction population table (`State`, `Population`).
pub(crate) fn read_jurisdictions(df: &DataFrame) -> Result<Vec<Jurisdiction>> {
    let names = text_column(df, "State")?;
    let populations = text_column(df, "Population")?;

    names.into_iter().zip(populations).enumerate()
        .filter(|(_, (name, _))| name.as_deref().is_some_and(|n| !n.is_empty()))
        .map(|(row, (name, population))| {
            let name = name.unwrap_or_default();
            let Some(population) = population.as_deref().and_then(parse_count) else {
                bail!("[io::csv::read] row {}: invalid population {:?} for {name}", row + 1, population);
            };
            Ok(Jurisdiction::new(name, population))
        })
        .collect()
}

/// Read respondent records using the configured column names.
/// A missing id falls back to the row number; missing values are empty strings.
pub(crate) fn read_respondents(df: &DataFrame, columns: &RespondentColumns) -> Result<Vec<RespondentRecord>> {
    let ids = text_column(df, &columns.id)?;
    let affiliations = text_column(df, &columns.affiliation)?;
    let geographies = text_column(df, &columns.geography)?;

    let records = ids.into_iter().zip(affiliations).zip(geographies).enumerate()
        .map(|(row, ((id, affiliation), geography))| RespondentRecord {
            id: id.filter(|s| !s.is_empty()).unwrap_or_else(|| format!("row-{}", row + 1)),
            affiliation: affiliation.unwrap_or_default(),
            geography: geography.unwrap_or_default(),
        })
        .collect();
    Ok(records)
}

/// Read overlay pieces (`ZipCode`, `StateAbbreviation`, `DistrictId`, `POP20`).
/// Rows missing any field are skipped.
pub(crate) fn read_population_pieces(df: &DataFrame) -> Result<Vec<PopulationPiece>> {
    let zips = text_column(df, "ZipCode")?;
    let states = text_column(df, "StateAbbreviation")?;
    let districts = text_column(df, "DistrictId")?;
    let populations = text_column(df, "POP20")?;

    let mut pieces = Vec::with_capacity(zips.len());
    let mut skipped = 0usize;
    for (((zip, state), district), population) in zips.into_iter().zip(states).zip(districts).zip(populations) {
        let (Some(zip), Some(state), Some(district), Some(population)) =
            (zip, state, district, population.as_deref().and_then(parse_population))
        else {
            skipped += 1;
            continue;
        };
        if zip.is_empty() || state.is_empty() || district.is_empty() {
            skipped += 1;
            continue;
        }

        let local_id = RawDistrictId::Text(district).local_id(&state);
        pieces.push(PopulationPiece { geography: zip, district: DistrictKey::new(&state, local_id), population });
    }

    if skipped > 0 {
        log::warn!("[io::csv::read] skipped {skipped} incomplete population pieces");
    }
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_table_accepts_thousands_separators() {
        let df = read_csv_string("State,Population\nCalifornia,\"39,538,223\"\nWyoming,576851\n,\n").unwrap();
        let jurisdictions = read_jurisdictions(&df).unwrap();
        assert_eq!(jurisdictions, [
            Jurisdiction::new("California", 39_538_223),
            Jurisdiction::new("Wyoming", 576_851),
        ]);
    }

    #[test]
    fn bad_population_is_an_error() {
        let df = read_csv_string("State,Population\nOhio,lots\n").unwrap();
        assert!(read_jurisdictions(&df).is_err());
    }

    #[test]
    fn respondents_keep_leading_zeros() {
        let csv = "ResponseId,zip,assigned_party,age\nR_1,02134,progressive,40\n,00501,patriot,33\n";
        let records = read_respondents(&read_csv_string(csv).unwrap(), &RespondentColumns::default()).unwrap();
        assert_eq!(records[0], RespondentRecord { id: "R_1".into(), affiliation: "progressive".into(), geography: "02134".into() });
        assert_eq!(records[1].id, "row-2");
        assert_eq!(records[1].geography, "00501");
    }

    #[test]
    fn missing_column_is_reported() {
        let df = read_csv_string("ResponseId,zip\nR_1,02134\n").unwrap();
        let err = read_respondents(&df, &RespondentColumns::default()).unwrap_err();
        assert!(err.to_string().contains("assigned_party"));
    }

    #[test]
    fn pieces_parse_prefixed_district_ids() {
        let csv = "ZipCode,StateAbbreviation,DistrictId,POP20\n46201,IN,IN7,1200\n46201,IN,5,\n46202,IN,7,30.5\n";
        let pieces = read_population_pieces(&read_csv_string(csv).unwrap()).unwrap();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].district, DistrictKey::numbered("IN", 7));
        assert_eq!(pieces[1].population, 30.5);
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    apportion::{Apportionment, DistrictSizes, SizeTable, classify_with_max},
    error::Result,
    states,
    types::Jurisdiction,
};

const TOTAL_ROW: &str = "Total";

/// One jurisdiction's line in an apportionment report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApportionmentRow {
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    pub population: u64,
    pub representatives: u32,
    pub districts: u32,
    /// Number of districts by number of representatives.
    #[serde(default)]
    pub district_sizes: BTreeMap<u32, u32>,
    /// District population by number of representatives.
    #[serde(default)]
    pub district_populations: BTreeMap<u32, u64>,
    #[serde(default)]
    pub population_per_member: u64,
    #[serde(default)]
    pub average_population_per_district: u64,
}

impl ApportionmentRow {
    fn new(jurisdiction: &Jurisdiction, seats: u32, sizes: &DistrictSizes) -> Self {
        Self {
            state: jurisdiction.name.clone(),
            abbreviation: states::abbreviation(&jurisdiction.name).map(str::to_string),
            population: jurisdiction.population,
            representatives: seats,
            districts: sizes.districts(),
            district_sizes: sizes.count_table(),
            district_populations: sizes.population_table(),
            population_per_member: rounded_ratio(jurisdiction.population, seats as u64),
            average_population_per_district: rounded_ratio(jurisdiction.population, sizes.districts() as u64),
        }
    }

    fn total<'a>(rows: impl IntoIterator<Item = &'a ApportionmentRow>) -> Self {
        let (population, representatives, districts) = rows.into_iter()
            .fold((0u64, 0u32, 0u32), |(p, r, d), row| (p + row.population, r + row.representatives, d + row.districts));

        Self {
            state: TOTAL_ROW.into(),
            abbreviation: None,
            population,
            representatives,
            districts,
            district_sizes: BTreeMap::new(),
            district_populations: BTreeMap::new(),
            population_per_member: rounded_ratio(population, representatives as u64),
            average_population_per_district: rounded_ratio(population, districts as u64),
        }
    }

    /// District sizes described by this row.
    pub fn sizes(&self) -> DistrictSizes {
        DistrictSizes::from_tables(&self.district_sizes, &self.district_populations)
    }
}

/// Seats, district counts and district populations for every apportioned jurisdiction.
/// Serialises as a JSON array of rows followed by a `Total` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ApportionmentRow>", into = "Vec<ApportionmentRow>")]
pub struct ApportionmentReport {
    rows: Vec<ApportionmentRow>,
    total: ApportionmentRow,
}

impl ApportionmentReport {
    /// Classify each jurisdiction's seats into districts and assemble the report.
    /// Rows are ordered by seats, largest first; equal seat counts keep input order.
    pub fn build(jurisdictions: &[Jurisdiction], apportionment: &Apportionment, max_size: u32) -> Result<Self> {
        let mut rows = Vec::with_capacity(jurisdictions.len());
        for jurisdiction in jurisdictions {
            let Some(seats) = apportionment.get(&jurisdiction.name) else { continue };
            let sizes = classify_with_max(seats, jurisdiction.population, max_size)?;
            rows.push(ApportionmentRow::new(jurisdiction, seats, &sizes));
        }
        rows.sort_by(|a, b| b.representatives.cmp(&a.representatives));

        let total = ApportionmentRow::total(&rows);
        Ok(Self { rows, total })
    }

    /// Jurisdiction rows, without the total.
    #[inline] pub fn rows(&self) -> &[ApportionmentRow] { &self.rows }

    #[inline] pub fn total(&self) -> &ApportionmentRow { &self.total }

    /// Row for a jurisdiction by full name.
    pub fn get(&self, name: &str) -> Option<&ApportionmentRow> {
        self.rows.iter().find(|row| row.state == name)
    }

    /// District sizes keyed by abbreviation. Rows without a known abbreviation are left out.
    pub fn size_table(&self) -> SizeTable {
        let mut table = SizeTable::new();
        for row in &self.rows {
            if let Some(abbr) = &row.abbreviation {
                table.insert(abbr, row.sizes());
            }
        }
        table
    }

    /// Jurisdictions that have no abbreviation and so cannot be matched to districts.
    pub fn unabbreviated(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().filter(|row| row.abbreviation.is_none()).map(|row| row.state.as_str())
    }
}

impl From<Vec<ApportionmentRow>> for ApportionmentReport {
    fn from(all: Vec<ApportionmentRow>) -> Self {
        let (totals, mut rows): (Vec<_>, Vec<_>) = all.into_iter().partition(|row| row.state == TOTAL_ROW);
        for row in &mut rows {
            if row.abbreviation.is_none() {
                row.abbreviation = states::abbreviation(&row.state).map(str::to_string);
            }
        }
        let total = totals.into_iter().next().unwrap_or_else(|| ApportionmentRow::total(&rows));
        Self { rows, total }
    }
}

impl From<ApportionmentReport> for Vec<ApportionmentRow> {
    fn from(report: ApportionmentReport) -> Self {
        let mut rows = report.rows;
        rows.push(report.total);
        rows
    }
}

fn rounded_ratio(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 { return 0 }
    (numerator as f64 / denominator as f64).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apportion::huntington_hill;

    fn report() -> ApportionmentReport {
        let jurisdictions = [
            Jurisdiction::new("Wyoming", 576_851),
            Jurisdiction::new("California", 39_538_223),
            Jurisdiction::new("Texas", 29_145_505),
        ];
        let apportionment = huntington_hill(&jurisdictions, 60).unwrap();
        ApportionmentReport::build(&jurisdictions, &apportionment, 6).unwrap()
    }

    #[test]
    fn rows_sorted_by_seats_with_total() {
        let report = report();
        let names: Vec<&str> = report.rows().iter().map(|r| r.state.as_str()).collect();
        assert_eq!(names, ["California", "Texas", "Wyoming"]);
        assert_eq!(report.total().representatives, 60);
        assert_eq!(report.total().population, 576_851 + 39_538_223 + 29_145_505);
        assert_eq!(report.total().districts, report.rows().iter().map(|r| r.districts).sum::<u32>());
    }

    #[test]
    fn rows_are_internally_consistent() {
        for row in report().rows() {
            let seats: u32 = row.district_sizes.iter().map(|(s, c)| s * c).sum();
            assert_eq!(seats, row.representatives);
            assert_eq!(row.district_sizes.values().sum::<u32>(), row.districts);
            assert!(row.abbreviation.is_some());
        }
    }

    #[test]
    fn json_uses_pascal_case_field_names() {
        let json = serde_json::to_value(report()).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3]["State"], "Total");
        let wyoming = &rows[2];
        assert_eq!(wyoming["State"], "Wyoming");
        assert_eq!(wyoming["Representatives"], 1);
        assert_eq!(wyoming["DistrictSizes"]["1"], 1);
        assert_eq!(wyoming["DistrictPopulations"]["1"], 576_851);
        assert_eq!(wyoming["PopulationPerMember"], 576_851);
    }

    #[test]
    fn reading_rows_without_abbreviations_fills_them() {
        let json = r#"[
            {"State": "Vermont", "Population": 643077, "Representatives": 1, "Districts": 1,
             "DistrictSizes": {"1": 1}, "DistrictPopulations": {"1": 643077},
             "PopulationPerMember": 643077, "AveragePopulationPerDistrict": 643077},
            {"State": "Total", "Population": 643077, "Representatives": 1, "Districts": 1,
             "DistrictSizes": {}, "DistrictPopulations": {},
             "PopulationPerMember": 643077, "AveragePopulationPerDistrict": 643077}
        ]"#;
        let report: ApportionmentReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.rows().len(), 1);
        assert_eq!(report.rows()[0].abbreviation.as_deref(), Some("VT"));
        assert_eq!(report.size_table().get("VT").unwrap().districts(), 1);
        assert_eq!(report.unabbreviated().count(), 0);
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{apportion::MAX_DISTRICT_SIZE, states, types::{AffiliationSet, Jurisdiction}, weights::WeightOptions};

/// Column names of the respondent table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RespondentColumns {
    pub id: String,
    pub affiliation: String,
    pub geography: String,
}

impl Default for RespondentColumns {
    fn default() -> Self {
        Self {
            id: "ResponseId".into(),
            affiliation: "assigned_party".into(),
            geography: "zip".into(),
        }
    }
}

/// Run configuration. Every field has a default, so a config file only lists overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seats in the legislature.
    pub total_seats: u32,
    /// Largest district magnitude.
    pub max_district_size: u32,
    pub include_dc: bool,
    pub include_pr: bool,
    /// Jurisdiction abbreviations whose weights and districts are dropped.
    pub ignored_jurisdictions: Vec<String>,
    /// Declared affiliation categories. Empty means every category found in the data.
    pub affiliations: Vec<String>,
    pub columns: RespondentColumns,
    /// Allowed deviation of a geography's weights from 100, in percentage points.
    pub weight_tolerance: f64,
    /// Relative margin for matching catalogue populations during verification.
    pub verify_margin: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_seats: 593,
            max_district_size: MAX_DISTRICT_SIZE,
            include_dc: false,
            include_pr: false,
            ignored_jurisdictions: states::DEFAULT_IGNORED.iter().map(|s| s.to_string()).collect(),
            affiliations: Vec::new(),
            columns: RespondentColumns::default(),
            weight_tolerance: 0.01,
            verify_margin: 0.001,
        }
    }
}

impl Config {
    /// Read a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        crate::io::read_json(path)
            .with_context(|| format!("[config] Failed to load config from {}", path.display()))
    }

    /// Read `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// True if `name` takes part in apportionment.
    pub fn includes(&self, name: &str) -> bool {
        let name = name.trim();
        if name.eq_ignore_ascii_case(states::DISTRICT_OF_COLUMBIA) { return self.include_dc }
        if name.eq_ignore_ascii_case(states::PUERTO_RICO) { return self.include_pr }
        true
    }

    /// Drop jurisdictions excluded from apportionment.
    pub fn filter_jurisdictions(&self, jurisdictions: Vec<Jurisdiction>) -> Vec<Jurisdiction> {
        jurisdictions.into_iter().filter(|j| self.includes(&j.name)).collect()
    }

    /// True if districts and weights of `abbreviation` are dropped.
    pub fn ignores(&self, abbreviation: &str) -> bool {
        self.ignored_jurisdictions.iter().any(|ig| ig.eq_ignore_ascii_case(abbreviation.trim()))
    }

    pub fn weight_options(&self) -> WeightOptions {
        WeightOptions { ignored: self.ignored_jurisdictions.clone(), tolerance: self.weight_tolerance }
    }

    /// The declared affiliations, or the sorted distinct categories of `observed` if none are declared.
    pub fn affiliation_set<'a>(&self, observed: impl IntoIterator<Item = &'a str>) -> AffiliationSet {
        if !self.affiliations.is_empty() {
            return AffiliationSet::new(&self.affiliations);
        }
        let mut found: Vec<&str> = observed.into_iter().map(str::trim).filter(|s| !s.is_empty()).collect();
        found.sort_unstable();
        found.dedup();
        AffiliationSet::new(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "total_seats": 435, "include_dc": true }"#).unwrap();
        assert_eq!(config.total_seats, 435);
        assert!(config.include_dc);
        assert_eq!(config.max_district_size, 6);
        assert_eq!(config.columns.geography, "zip");
        assert!(config.ignores("gu"));
    }

    #[test]
    fn excludes_dc_and_pr_by_default() {
        let config = Config::default();
        let kept = config.filter_jurisdictions(vec![
            Jurisdiction::new("Ohio", 1),
            Jurisdiction::new("District of Columbia", 1),
            Jurisdiction::new("Puerto Rico", 1),
        ]);
        assert_eq!(kept, [Jurisdiction::new("Ohio", 1)]);

        let config = Config { include_pr: true, ..Config::default() };
        assert!(config.includes("Puerto Rico"));
        assert!(!config.includes("District of Columbia"));
    }

    #[test]
    fn affiliations_from_data_when_undeclared() {
        let config = Config::default();
        let set = config.affiliation_set(["patriot", "progressive", "patriot", ""]);
        let names: Vec<&str> = set.iter().map(|(_, n)| n).collect();
        assert_eq!(names, ["patriot", "progressive"]);

        let config = Config { affiliations: vec!["progressive".into(), "growth".into()], ..Config::default() };
        let set = config.affiliation_set(["patriot"]);
        assert_eq!(set.len(), 2);
        assert!(set.find("patriot").is_none());
    }
}

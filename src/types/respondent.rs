use smallvec::SmallVec;

use super::{Affiliation, DistrictKey};

/// Share of a geography (and so of a respondent) falling inside one district.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub district: DistrictKey,
    pub percentage: f64, // 0..=100
}

impl Membership {
    pub fn new(district: DistrictKey, percentage: f64) -> Self {
        Self { district, percentage }
    }
}

/// Most geographies touch one or two districts.
pub type Memberships = SmallVec<[Membership; 2]>;

/// A survey respondent with their district memberships resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Respondent {
    pub id: String,
    pub affiliation: Affiliation,
    pub geography: String,
    pub memberships: Memberships,
}

impl Respondent {
    /// A respondent with exactly one membership at 100%.
    pub fn is_wholly_contained(&self) -> bool {
        self.memberships.len() == 1 && (self.memberships[0].percentage - 100.0).abs() < 1e-9
    }

    /// A respondent whose geography has no district weights.
    #[inline] pub fn is_unmapped(&self) -> bool { self.memberships.is_empty() }

    /// Membership entry for `district`, if any.
    pub fn membership(&self, district: &DistrictKey) -> Option<&Membership> {
        self.memberships.iter().find(|m| &m.district == district)
    }
}

/// A district from the catalogue, with its population when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct District {
    pub key: DistrictKey,
    pub population: Option<u64>,
}

impl District {
    pub fn new(key: DistrictKey, population: Option<u64>) -> Self {
        Self { key, population }
    }
}

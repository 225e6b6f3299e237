use std::{collections::{BTreeMap, BTreeSet}, sync::Arc};

use crate::types::{District, DistrictKey, LocalId};

/// All known districts, ordered by `DistrictKey`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    districts: BTreeMap<DistrictKey, District>,
}

impl Catalogue {
    pub fn new() -> Self { Self::default() }

    /// Add a district, returning the entry it replaced.
    pub fn insert(&mut self, district: District) -> Option<District> {
        self.districts.insert(district.key.clone(), district)
    }

    /// Add every district from `other`, replacing entries with the same key.
    pub fn extend(&mut self, other: Catalogue) {
        self.districts.extend(other.districts);
    }

    /// Keep only the districts for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&District) -> bool) {
        self.districts.retain(|_, district| keep(district));
    }

    #[inline] pub fn get(&self, key: &DistrictKey) -> Option<&District> { self.districts.get(key) }

    #[inline] pub fn contains(&self, key: &DistrictKey) -> bool { self.districts.contains_key(key) }

    #[inline] pub fn len(&self) -> usize { self.districts.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.districts.is_empty() }

    /// Districts in key order.
    pub fn iter(&self) -> impl Iterator<Item = &District> + '_ { self.districts.values() }

    /// Districts of one jurisdiction, in local id order.
    pub fn jurisdiction(&self, abbreviation: &str) -> impl Iterator<Item = &District> + '_ {
        let start = DistrictKey { jurisdiction: Arc::from(abbreviation), local_id: LocalId::Number(0) };
        let abbreviation = start.jurisdiction.clone();
        self.districts.range(start..)
            .take_while(move |(key, _)| key.jurisdiction == abbreviation)
            .map(|(_, district)| district)
    }

    /// Abbreviations of all jurisdictions with at least one district.
    pub fn jurisdictions(&self) -> BTreeSet<&str> {
        self.districts.keys().map(|key| key.jurisdiction()).collect()
    }
}

impl FromIterator<District> for Catalogue {
    fn from_iter<I: IntoIterator<Item = District>>(iter: I) -> Self {
        let mut catalogue = Catalogue::new();
        for district in iter { catalogue.insert(district); }
        catalogue
    }
}

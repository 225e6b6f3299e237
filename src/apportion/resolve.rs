use std::collections::BTreeMap;

use crate::{
    apportion::DistrictSizes,
    catalogue::Catalogue,
    error::{Error, Result},
    types::DistrictKey,
};

/// District sizes for every apportioned jurisdiction, keyed by abbreviation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeTable {
    by_jurisdiction: BTreeMap<String, DistrictSizes>,
}

impl SizeTable {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, abbreviation: &str, sizes: DistrictSizes) {
        self.by_jurisdiction.insert(abbreviation.trim().to_ascii_uppercase(), sizes);
    }

    #[inline]
    pub fn get(&self, abbreviation: &str) -> Option<&DistrictSizes> {
        self.by_jurisdiction.get(abbreviation)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DistrictSizes)> + '_ {
        self.by_jurisdiction.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline] pub fn len(&self) -> usize { self.by_jurisdiction.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.by_jurisdiction.is_empty() }
}

/// Infer how many seats a district elects from its population.
///
/// A jurisdiction with one district size needs no population. Otherwise the size group
/// whose representative population is closest to `population` is found, and the answer is
/// the smallest size in the table if that value lies nearer the lowest representative
/// population (ties included), or the largest size if it lies nearer the highest.
/// This is a two-bucket approximation, not an exact inversion of `classify`.
///
/// Returns `None` when the table is empty, or when population is needed but missing.
pub fn resolve_seats(population: Option<u64>, sizes: &DistrictSizes) -> Option<u32> {
    let smallest = sizes.smallest()?;
    let largest = sizes.largest()?;
    if sizes.len() == 1 { return Some(smallest.size) }

    let population = population? as f64;
    let closest = sizes.groups()
        .map(|g| g.representative_population as f64)
        .min_by(|a, b| (a - population).abs().total_cmp(&(b - population).abs()))?;

    let reps = sizes.groups().map(|g| g.representative_population as f64);
    let min = reps.clone().fold(f64::INFINITY, f64::min);
    let max = reps.fold(f64::NEG_INFINITY, f64::max);

    if closest - min <= max - closest { Some(smallest.size) } else { Some(largest.size) }
}

/// Resolve the seats elected by the catalogue district `key`.
pub fn resolve_district(catalogue: &Catalogue, key: &DistrictKey, table: &SizeTable) -> Result<u32> {
    let district = catalogue.get(key).ok_or_else(|| Error::DistrictNotFound(key.clone()))?;
    let sizes = table.get(key.jurisdiction())
        .ok_or_else(|| Error::JurisdictionNotApportioned(key.jurisdiction().to_string()))?;

    resolve_seats(district.population, sizes).ok_or_else(|| Error::PopulationMissing(key.clone()))
}

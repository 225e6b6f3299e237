use std::collections::BTreeMap;

use crate::{
    apportion::{SizeTable, resolve_district},
    catalogue::Catalogue,
    error::{Error, Result},
    types::DistrictKey,
};

/// Seats elected by each catalogue district.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepresentativeCounts {
    counts: BTreeMap<DistrictKey, u32>,
    /// Districts whose count could not be resolved, with the reason.
    unresolved: Vec<(DistrictKey, Error)>,
}

impl RepresentativeCounts {
    #[inline] pub fn get(&self, key: &DistrictKey) -> Option<u32> { self.counts.get(key).copied() }

    pub fn iter(&self) -> impl Iterator<Item = (&DistrictKey, u32)> + '_ {
        self.counts.iter().map(|(k, &v)| (k, v))
    }

    #[inline] pub fn unresolved(&self) -> &[(DistrictKey, Error)] { &self.unresolved }

    #[inline] pub fn len(&self) -> usize { self.counts.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    /// Seats summed per jurisdiction abbreviation.
    pub fn seats_by_jurisdiction(&self) -> BTreeMap<&str, u32> {
        let mut out = BTreeMap::new();
        for (key, seats) in &self.counts {
            *out.entry(key.jurisdiction()).or_default() += seats;
        }
        out
    }
}

/// Resolve the representative count of every catalogue district.
///
/// A district lacking the population needed to pick its size is skipped and recorded.
/// A district whose jurisdiction has no apportionment row aborts with an error.
pub fn compute_representative_counts(catalogue: &Catalogue, table: &SizeTable) -> Result<RepresentativeCounts> {
    let mut out = RepresentativeCounts::default();

    for district in catalogue.iter() {
        match resolve_district(catalogue, &district.key, table) {
            Ok(seats) => { out.counts.insert(district.key.clone(), seats); }
            Err(err @ Error::PopulationMissing(_)) => {
                log::warn!("[counts] skipping district: {err}");
                out.unresolved.push((district.key.clone(), err));
            }
            Err(err) => return Err(err),
        }
    }

    log::info!("[counts] resolved {} of {} districts", out.counts.len(), catalogue.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apportion::classify, types::District};

    fn table() -> SizeTable {
        let mut table = SizeTable::new();
        table.insert("NV", classify(7, 700).unwrap());
        table.insert("VT", classify(1, 100).unwrap());
        table
    }

    #[test]
    fn resolves_and_skips() {
        let catalogue: Catalogue = [
            District::new(DistrictKey::numbered("NV", 1), Some(598)),
            District::new(DistrictKey::numbered("NV", 2), Some(101)),
            District::new(DistrictKey::numbered("NV", 3), None),
            District::new(DistrictKey::numbered("VT", 1), None),
        ].into_iter().collect();

        let counts = compute_representative_counts(&catalogue, &table()).unwrap();
        assert_eq!(counts.get(&DistrictKey::numbered("NV", 1)), Some(6));
        assert_eq!(counts.get(&DistrictKey::numbered("NV", 2)), Some(1));
        assert_eq!(counts.get(&DistrictKey::numbered("VT", 1)), Some(1));
        assert_eq!(counts.unresolved().len(), 1);
        assert_eq!(counts.unresolved()[0].0, DistrictKey::numbered("NV", 3));
        assert_eq!(counts.seats_by_jurisdiction()["NV"], 7);
    }

    #[test]
    fn unapportioned_jurisdiction_aborts() {
        let catalogue: Catalogue = [District::new(DistrictKey::numbered("DC", 1), Some(1))].into_iter().collect();
        assert_eq!(
            compute_representative_counts(&catalogue, &table()).unwrap_err(),
            Error::JurisdictionNotApportioned("DC".into())
        );
    }
}

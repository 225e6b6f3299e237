use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::{
    catalogue::Catalogue,
    types::{Affiliation, AffiliationSet, District, DistrictKey, Respondent},
};

/// Vote mass for one (district, affiliation) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteTally {
    pub district: DistrictKey,
    pub affiliation: Affiliation,
    pub total: f64,
}

/// Counters gathered during aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateStats {
    pub respondents: usize,
    /// Respondents with no district membership; they contribute nothing.
    pub unmapped: usize,
    /// Mass belonging to memberships whose district is not in the catalogue.
    pub unmatched_mass: f64,
    /// Mass accumulated across all districts and affiliations.
    pub total_mass: f64,
}

impl AggregateStats {
    #[inline] pub fn mapped(&self) -> usize { self.respondents - self.unmapped }
}

/// Per-district, per-affiliation vote totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    affiliations: AffiliationSet,
    totals: BTreeMap<DistrictKey, Vec<f64>>, // indexed by affiliation
    stats: AggregateStats,
}

impl Tally {
    #[inline] pub fn affiliations(&self) -> &AffiliationSet { &self.affiliations }

    #[inline] pub fn stats(&self) -> &AggregateStats { &self.stats }

    /// Districts in key order.
    pub fn districts(&self) -> impl Iterator<Item = &DistrictKey> + '_ { self.totals.keys() }

    /// Totals for one district, indexed by affiliation.
    #[inline]
    pub fn district(&self, key: &DistrictKey) -> Option<&[f64]> { self.totals.get(key).map(Vec::as_slice) }

    /// Vote mass for a (district, affiliation) pair; 0 for unknown districts.
    pub fn get(&self, key: &DistrictKey, affiliation: Affiliation) -> f64 {
        self.district(key).and_then(|t| t.get(affiliation.index()).copied()).unwrap_or(0.0)
    }

    /// Every (district, affiliation) pair, zero totals included, districts in key order
    /// and affiliations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = VoteTally> + '_ {
        self.totals.iter().flat_map(|(key, totals)| {
            totals.iter().enumerate().map(move |(i, &total)| VoteTally {
                district: key.clone(),
                affiliation: Affiliation(i),
                total,
            })
        })
    }
}

/// Fraction of `respondent`'s vote that falls in `district`.
#[inline]
fn contribution(respondent: &Respondent, district: &DistrictKey) -> f64 {
    respondent.membership(district).map_or(0.0, |m| m.percentage / 100.0)
}

fn tally_district(district: &District, respondents: &[Respondent], width: usize) -> Vec<f64> {
    let mut totals = vec![0.0; width];
    for respondent in respondents {
        if respondent.is_unmapped() { continue }
        let mass = contribution(respondent, &district.key);
        if mass > 0.0 {
            totals[respondent.affiliation.index()] += mass;
        }
    }
    totals
}

/// Aggregate respondents into per-district, per-affiliation totals.
///
/// Each catalogue district scans every respondent and adds the percentage / 100 of the
/// matching membership to the respondent's affiliation. Districts are independent, so the
/// scan runs in parallel; output order and values match a sequential run.
pub fn aggregate(respondents: &[Respondent], catalogue: &Catalogue, affiliations: &AffiliationSet) -> Tally {
    let width = affiliations.len();
    let districts: Vec<&District> = catalogue.iter().collect();

    let totals: Vec<Vec<f64>> = districts.par_iter()
        .map(|district| tally_district(district, respondents, width))
        .collect();

    let unmapped = respondents.iter().filter(|r| r.is_unmapped()).count();
    if unmapped > 0 {
        log::warn!("[tally] {unmapped} of {} respondents have no district weights", respondents.len());
    }

    let unmatched_mass: f64 = respondents.iter()
        .flat_map(|r| r.memberships.iter())
        .filter(|m| !catalogue.contains(&m.district))
        .map(|m| m.percentage / 100.0)
        .sum();
    if unmatched_mass > 0.0 {
        log::warn!("[tally] {unmatched_mass:.3} votes fall in districts missing from the catalogue");
    }

    let total_mass: f64 = totals.iter().flatten().sum();
    let stats = AggregateStats { respondents: respondents.len(), unmapped, unmatched_mass, total_mass };
    log::info!(
        "[tally] {} districts, {} mapped respondents, {:.3} votes",
        districts.len(), stats.mapped(), total_mass
    );

    Tally {
        affiliations: affiliations.clone(),
        totals: districts.into_iter().map(|d| d.key.clone()).zip(totals).collect(),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;
    use crate::types::Membership;

    fn affiliations() -> AffiliationSet { AffiliationSet::new(["progressive", "patriot", "new_liberal"]) }

    fn respondent(id: &str, affiliation: &str, memberships: &[(&DistrictKey, f64)]) -> Respondent {
        Respondent {
            id: id.into(),
            affiliation: affiliations().find(affiliation).unwrap(),
            geography: String::new(),
            memberships: memberships.iter().map(|(k, p)| Membership::new((*k).clone(), *p)).collect(),
        }
    }

    fn catalogue(keys: &[&DistrictKey]) -> Catalogue {
        keys.iter().map(|k| District::new((*k).clone(), None)).collect()
    }

    #[test]
    fn whole_and_split_respondents() {
        let x = DistrictKey::numbered("CA", 1);
        let y = DistrictKey::numbered("CA", 2);
        let set = affiliations();
        let progressive = set.find("progressive").unwrap();
        let patriot = set.find("patriot").unwrap();
        let new_liberal = set.find("new_liberal").unwrap();

        let respondents = [
            respondent("r1", "progressive", &[(&x, 100.0)]),
            respondent("r2", "patriot", &[(&x, 50.0), (&y, 50.0)]),
        ];
        let tally = aggregate(&respondents, &catalogue(&[&x, &y]), &set);

        assert_eq!(tally.get(&x, progressive), 1.0);
        assert_eq!(tally.get(&x, patriot), 0.5);
        assert_eq!(tally.get(&y, patriot), 0.5);
        assert_eq!(tally.get(&y, progressive), 0.0);
        assert_eq!(tally.get(&x, new_liberal), 0.0);
        assert_eq!(tally.get(&y, new_liberal), 0.0);
        assert_eq!(tally.iter().count(), 6);
    }

    #[test]
    fn single_membership_counts_once() {
        let keys: Vec<DistrictKey> = (1..=4).map(|n| DistrictKey::numbered("OH", n)).collect();
        let set = affiliations();
        let patriot = set.find("patriot").unwrap();
        let respondents = [respondent("r1", "patriot", &[(&keys[2], 100.0)])];
        let tally = aggregate(&respondents, &catalogue(&keys.iter().collect::<Vec<_>>()), &set);

        for t in tally.iter() {
            let expected = if t.district == keys[2] && t.affiliation == patriot { 1.0 } else { 0.0 };
            assert_eq!(t.total, expected, "{} {:?}", t.district, t.affiliation);
        }
    }

    #[test]
    fn split_mass_sums_to_one() {
        let keys: Vec<DistrictKey> = (1..=3).map(|n| DistrictKey::numbered("TX", n)).collect();
        let set = affiliations();
        let respondents = [respondent("r1", "new_liberal", &[(&keys[0], 100.0 / 3.0), (&keys[1], 100.0 / 3.0), (&keys[2], 100.0 / 3.0)])];
        let tally = aggregate(&respondents, &catalogue(&keys.iter().collect::<Vec<_>>()), &set);

        let sum: f64 = tally.iter().map(|t| t.total).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((tally.stats().total_mass - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unmapped_and_unmatched_are_counted() {
        let x = DistrictKey::numbered("NJ", 1);
        let gone = DistrictKey::numbered("NJ", 99);
        let set = affiliations();
        let mut lost = respondent("r2", "patriot", &[(&x, 60.0), (&gone, 40.0)]);
        lost.geography = "07001".into();
        let respondents = [respondent("r1", "patriot", &[]), lost];

        let tally = aggregate(&respondents, &catalogue(&[&x]), &set);
        let stats = tally.stats();
        assert_eq!(stats.respondents, 2);
        assert_eq!(stats.unmapped, 1);
        assert_eq!(stats.mapped(), 1);
        assert!((stats.unmatched_mass - 0.4).abs() < 1e-12);
        assert!((stats.total_mass + stats.unmatched_mass - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mass_equals_mapped_respondents() {
        let keys: Vec<DistrictKey> = (1..=5).map(|n| DistrictKey::numbered("PA", n)).collect();
        let set = affiliations();
        let names = ["progressive", "patriot", "new_liberal"];
        let respondents: Vec<Respondent> = (0..300)
            .map(|i| {
                let a = &keys[i % 5];
                let b = &keys[(i * 7 + 1) % 5];
                let split = (i % 10) as f64 * 10.0;
                let memberships: Vec<(&DistrictKey, f64)> = match i % 4 {
                    0 => vec![],
                    1 => vec![(a, 100.0)],
                    _ if a == b => vec![(a, 100.0)],
                    _ => vec![(a, split), (b, 100.0 - split)],
                };
                respondent(&format!("r{i}"), names[i % 3], &memberships)
            })
            .collect();

        let tally = aggregate(&respondents, &catalogue(&keys.iter().collect::<Vec<_>>()), &set);
        let mapped = respondents.iter().filter(|r| !r.is_unmapped()).count();
        assert_eq!(tally.stats().mapped(), mapped);
        assert!((tally.stats().total_mass - mapped as f64).abs() < 1e-9 * mapped as f64);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let x = DistrictKey::numbered("GA", 1);
        let y = DistrictKey::numbered("GA", 2);
        let set = affiliations();
        let mut r = respondent("r1", "progressive", &[]);
        r.memberships = smallvec![Membership::new(x.clone(), 33.3), Membership::new(y.clone(), 66.7)];
        let respondents = vec![r; 25];
        let catalogue = catalogue(&[&x, &y]);

        assert_eq!(aggregate(&respondents, &catalogue, &set), aggregate(&respondents, &catalogue, &set));
    }
}

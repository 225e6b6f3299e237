//! Weighted aggregation of survey respondents into per-district vote totals.

mod aggregate;
mod counts;
mod enrich;
mod summary;

pub use aggregate::{AggregateStats, Tally, VoteTally, aggregate};
pub use counts::{RepresentativeCounts, compute_representative_counts};
pub use enrich::{EnrichStats, RespondentRecord, enrich};
pub use summary::RunSummary;

use crate::{
    apportion::SizeTable,
    catalogue::Catalogue,
    error::Result,
    types::{AffiliationSet, DistrictKey},
    weights::WeightTable,
};

/// One line of the final table: a district's vote mass for one affiliation.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub district: DistrictKey,
    /// `None` when the district's count could not be resolved.
    pub representatives: Option<u32>,
    pub affiliation: String,
    pub votes: f64,
}

/// Join vote totals with representative counts, one row per (district, affiliation).
pub fn join(tally: &Tally, counts: &RepresentativeCounts) -> Vec<OutputRow> {
    tally.iter()
        .map(|t| OutputRow {
            representatives: counts.get(&t.district),
            affiliation: tally.affiliations().name(t.affiliation).to_string(),
            district: t.district,
            votes: t.total,
        })
        .collect()
}

/// Output of a full tabulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Tabulation {
    pub rows: Vec<OutputRow>,
    pub counts: RepresentativeCounts,
    pub summary: RunSummary,
}

/// Enrich respondent records, aggregate them over the catalogue and join the result with
/// each district's representative count. `summary.weights` is left for the caller, who
/// loaded the weight table.
pub fn tabulate(
    records: &[RespondentRecord],
    weights: &WeightTable,
    catalogue: &Catalogue,
    affiliations: &AffiliationSet,
    sizes: &SizeTable,
) -> Result<Tabulation> {
    let counts = compute_representative_counts(catalogue, sizes)?;
    let (respondents, enrich_stats) = enrich(records, weights, affiliations);
    let tally = aggregate(&respondents, catalogue, affiliations);

    let summary = RunSummary {
        weights: Default::default(),
        enrich: enrich_stats,
        aggregate: *tally.stats(),
        districts: catalogue.len(),
        unresolved_districts: counts.unresolved().len(),
    };

    Ok(Tabulation { rows: join(&tally, &counts), counts, summary })
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;
    use crate::{apportion::classify, types::{District, Membership}};

    #[test]
    fn tabulate_joins_counts_and_keeps_zero_rows() {
        let x = DistrictKey::numbered("NV", 1);
        let y = DistrictKey::numbered("NV", 2);
        let catalogue: Catalogue = [District::new(x.clone(), Some(600)), District::new(y.clone(), Some(100))]
            .into_iter().collect();
        let mut sizes = SizeTable::new();
        sizes.insert("NV", classify(7, 700).unwrap());

        let mut weights = WeightTable::new();
        weights.insert("89501", smallvec![Membership::new(x.clone(), 100.0)]);
        weights.insert("89502", smallvec![Membership::new(x.clone(), 50.0), Membership::new(y.clone(), 50.0)]);

        let records = [
            RespondentRecord { id: "1".into(), affiliation: "progressive".into(), geography: "89501".into() },
            RespondentRecord { id: "2".into(), affiliation: "patriot".into(), geography: "89502".into() },
            RespondentRecord { id: "3".into(), affiliation: "patriot".into(), geography: "00000".into() },
        ];
        let affiliations = AffiliationSet::new(["progressive", "patriot", "growth"]);

        let result = tabulate(&records, &weights, &catalogue, &affiliations, &sizes).unwrap();

        let rows: Vec<(String, Option<u32>, &str, f64)> = result.rows.iter()
            .map(|r| (r.district.to_string(), r.representatives, r.affiliation.as_str(), r.votes))
            .collect();
        assert_eq!(rows, [
            ("NV-1".to_string(), Some(6), "progressive", 1.0),
            ("NV-1".to_string(), Some(6), "patriot", 0.5),
            ("NV-1".to_string(), Some(6), "growth", 0.0),
            ("NV-2".to_string(), Some(1), "progressive", 0.0),
            ("NV-2".to_string(), Some(1), "patriot", 0.5),
            ("NV-2".to_string(), Some(1), "growth", 0.0),
        ]);

        assert_eq!(result.summary.aggregate.unmapped, 1);
        assert_eq!(result.summary.enrich.unmapped_geography, 1);
        assert_eq!(result.summary.districts, 2);
        assert!((result.summary.aggregate.total_mass - 2.0).abs() < 1e-12);
    }
}

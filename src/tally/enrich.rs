use crate::{
    types::{AffiliationSet, Respondent},
    weights::WeightTable,
};

/// A respondent as read from the survey table, before district lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespondentRecord {
    pub id: String,
    pub affiliation: String,
    pub geography: String,
}

/// Counters gathered while enriching respondent records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichStats {
    pub records: usize,
    /// Records whose affiliation is not a declared category; they are dropped.
    pub unknown_affiliation: usize,
    /// Records whose geography key has no weights; kept with no memberships.
    pub unmapped_geography: usize,
}

/// Attach district memberships to every record through the weight table.
pub fn enrich(
    records: &[RespondentRecord],
    weights: &WeightTable,
    affiliations: &AffiliationSet,
) -> (Vec<Respondent>, EnrichStats) {
    let mut stats = EnrichStats { records: records.len(), ..Default::default() };
    let mut respondents = Vec::with_capacity(records.len());

    for record in records {
        let Some(affiliation) = affiliations.find(&record.affiliation) else {
            log::debug!("[enrich] respondent {} has undeclared affiliation '{}'", record.id, record.affiliation);
            stats.unknown_affiliation += 1;
            continue;
        };

        let memberships = weights.memberships(&record.geography);
        if memberships.is_empty() {
            log::debug!("[enrich] respondent {} geography '{}' is unmapped", record.id, record.geography);
            stats.unmapped_geography += 1;
        }

        respondents.push(Respondent {
            id: record.id.clone(),
            affiliation,
            geography: record.geography.clone(),
            memberships,
        });
    }

    if stats.unknown_affiliation > 0 {
        log::warn!("[enrich] dropped {} respondents with undeclared affiliations", stats.unknown_affiliation);
    }
    if stats.unmapped_geography > 0 {
        log::warn!("[enrich] {} respondents have unmapped geography keys", stats.unmapped_geography);
    }

    (respondents, stats)
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;
    use crate::types::{DistrictKey, Membership};

    fn record(id: &str, affiliation: &str, geography: &str) -> RespondentRecord {
        RespondentRecord { id: id.into(), affiliation: affiliation.into(), geography: geography.into() }
    }

    #[test]
    fn attaches_memberships_and_counts_misses() {
        let mut weights = WeightTable::new();
        weights.insert("91913", smallvec![Membership::new(DistrictKey::numbered("CA", 53), 100.0)]);
        let affiliations = AffiliationSet::new(["american_labor", "new_liberal"]);

        let records = [
            record("R_1", "american_labor", "91913"),
            record("R_2", "new_liberal", "99999"),
            record("R_3", "whig", "91913"),
        ];
        let (respondents, stats) = enrich(&records, &weights, &affiliations);

        assert_eq!(stats, EnrichStats { records: 3, unknown_affiliation: 1, unmapped_geography: 1 });
        assert_eq!(respondents.len(), 2);
        assert!(respondents[0].is_wholly_contained());
        assert!(respondents[1].is_unmapped());
        assert_eq!(respondents[1].affiliation, affiliations.find("new_liberal").unwrap());
    }
}

use std::collections::BTreeMap;

use crate::{
    types::DistrictKey,
    weights::{DistrictWeight, GeographyWeights, RawDistrictId, RawWeightMap},
};

/// Population of the part of one geography that falls in one district,
/// as produced by the external overlay step.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationPiece {
    pub geography: String,
    pub district: DistrictKey,
    pub population: f64,
}

/// Counters gathered while building weights from population pieces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub added: usize,
    /// Geographies already present in the existing map and left untouched.
    pub kept: usize,
    /// Geographies whose pieces hold no population.
    pub zero_population: usize,
}

/// Extend `existing` with a weight entry per geography found in `pieces`.
/// Each district's percentage is its share of the geography's total population.
pub fn build_weights(mut existing: RawWeightMap, pieces: &[PopulationPiece]) -> (RawWeightMap, BuildStats) {
    let mut stats = BuildStats::default();

    let mut by_geography: BTreeMap<&str, BTreeMap<&DistrictKey, f64>> = BTreeMap::new();
    for piece in pieces {
        *by_geography.entry(piece.geography.trim())
            .or_default()
            .entry(&piece.district)
            .or_default() += piece.population.max(0.0);
    }

    for (geography, districts) in by_geography {
        if existing.contains_key(geography) {
            log::debug!("[weights] geography {geography} already mapped, keeping it");
            stats.kept += 1;
            continue;
        }

        let total: f64 = districts.values().sum();
        if total <= 0.0 {
            log::warn!("[weights] geography {geography} has no population, skipping");
            stats.zero_population += 1;
            continue;
        }

        let weights = districts.into_iter()
            .map(|(district, population)| DistrictWeight {
                district_id: RawDistrictId::from(district.local_id()),
                state: district.jurisdiction().to_string(),
                percentage: population / total * 100.0,
            })
            .collect();

        existing.insert(geography.to_string(), GeographyWeights { districts: weights });
        stats.added += 1;
    }

    (existing, stats)
}

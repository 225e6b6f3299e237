use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::types::{DistrictKey, LocalId, Membership, Memberships};

/// District id as written in a weight file: a number or a (possibly state-prefixed) string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDistrictId {
    Number(u32),
    Text(String),
}

impl RawDistrictId {
    /// Local id within `jurisdiction`, dropping a leading abbreviation ("CA12" becomes 12).
    pub fn local_id(&self, jurisdiction: &str) -> LocalId {
        match self {
            RawDistrictId::Number(n) => LocalId::Number(*n),
            RawDistrictId::Text(text) => {
                let text = text.trim();
                let stripped = text.get(..jurisdiction.len())
                    .filter(|prefix| prefix.eq_ignore_ascii_case(jurisdiction))
                    .map(|_| text[jurisdiction.len()..].trim_start_matches('-'))
                    .filter(|rest| !rest.is_empty())
                    .unwrap_or(text);
                LocalId::parse(stripped)
            }
        }
    }
}

impl From<&LocalId> for RawDistrictId {
    fn from(id: &LocalId) -> Self {
        match id {
            LocalId::Number(n) => RawDistrictId::Number(*n),
            LocalId::Name(s) => RawDistrictId::Text(s.to_string()),
        }
    }
}

/// One district's share of a geography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictWeight {
    pub district_id: RawDistrictId,
    pub state: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeographyWeights {
    pub districts: Vec<DistrictWeight>,
}

/// Geography key → district weights, in the on-disk layout.
pub type RawWeightMap = BTreeMap<String, GeographyWeights>;

/// Options applied when loading a raw weight map.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightOptions {
    /// Jurisdiction abbreviations whose weights are dropped.
    pub ignored: Vec<String>,
    /// Allowed deviation of a geography's percentage sum from 100, in percentage points.
    pub tolerance: f64,
}

impl Default for WeightOptions {
    fn default() -> Self {
        Self {
            ignored: crate::states::DEFAULT_IGNORED.iter().map(|s| s.to_string()).collect(),
            tolerance: 0.01,
        }
    }
}

/// Counters gathered while loading a weight map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightStats {
    pub geographies: usize,
    /// Individual district weights dropped because their jurisdiction is ignored.
    pub ignored_weights: usize,
    /// Geographies whose percentages were rescaled to sum to 100.
    pub renormalized: usize,
    /// Geographies left with no usable weight.
    pub empty: usize,
}

/// Geography key → district memberships whose percentages sum to 100.
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    entries: AHashMap<String, Memberships>,
}

impl WeightTable {
    pub fn new() -> Self { Self::default() }

    /// Load a raw map: drop ignored jurisdictions, merge repeated districts, skip empty
    /// geographies and rescale any whose sum is off by more than the tolerance.
    pub fn from_raw(raw: &RawWeightMap, options: &WeightOptions) -> (Self, WeightStats) {
        let mut table = WeightTable::new();
        let mut stats = WeightStats::default();

        for (geography, weights) in raw {
            let mut memberships = Memberships::new();
            for weight in &weights.districts {
                let state = weight.state.trim();
                if options.ignored.iter().any(|ig| ig.eq_ignore_ascii_case(state)) {
                    stats.ignored_weights += 1;
                    continue;
                }
                if !(weight.percentage > 0.0) { continue }

                let key = DistrictKey::new(state, weight.district_id.local_id(state));
                match memberships.iter_mut().find(|m| m.district == key) {
                    Some(m) => m.percentage += weight.percentage,
                    None => memberships.push(Membership::new(key, weight.percentage)),
                }
            }

            let sum: f64 = memberships.iter().map(|m| m.percentage).sum();
            if memberships.is_empty() || !sum.is_finite() || sum <= 0.0 {
                log::debug!("[weights] no usable districts for geography {geography}");
                stats.empty += 1;
                continue;
            }
            if (sum - 100.0).abs() > options.tolerance {
                log::warn!("[weights] geography {geography} sums to {sum:.4}%, rescaling to 100%");
                for m in memberships.iter_mut() { m.percentage *= 100.0 / sum; }
                stats.renormalized += 1;
            }

            table.entries.insert(geography.trim().to_string(), memberships);
        }

        stats.geographies = table.entries.len();
        (table, stats)
    }

    pub fn insert(&mut self, geography: &str, memberships: Memberships) {
        self.entries.insert(geography.trim().to_string(), memberships);
    }

    #[inline]
    pub fn get(&self, geography: &str) -> Option<&Memberships> { self.entries.get(geography.trim()) }

    /// Memberships for `geography`, empty if it is unmapped.
    pub fn memberships(&self, geography: &str) -> Memberships {
        self.get(geography).cloned().unwrap_or_default()
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

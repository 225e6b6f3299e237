use crate::{apportion::ApportionmentReport, catalogue::Catalogue};

/// Districts of one size whose catalogue populations did not match the expected count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeMismatch {
    pub size: u32,
    pub expected: u32,
    pub matched: u32,
}

/// Outcome of checking one jurisdiction's catalogue districts against its report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JurisdictionCheck {
    pub state: String,
    pub abbreviation: String,
    pub expected_districts: u32,
    pub found_districts: u32,
    pub size_mismatches: Vec<SizeMismatch>,
}

impl JurisdictionCheck {
    #[inline] pub fn district_count_ok(&self) -> bool { self.expected_districts == self.found_districts }

    #[inline] pub fn populations_ok(&self) -> bool { self.size_mismatches.is_empty() }

    #[inline] pub fn is_ok(&self) -> bool { self.district_count_ok() && self.populations_ok() }
}

/// Result of verifying a catalogue against an apportionment report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verification {
    pub checks: Vec<JurisdictionCheck>,
    /// Report rows with no known abbreviation.
    pub unabbreviated: Vec<String>,
    /// Jurisdictions with no districts in the catalogue at all.
    pub missing: Vec<String>,
}

impl Verification {
    pub fn failures(&self) -> impl Iterator<Item = &JurisdictionCheck> + '_ {
        self.checks.iter().filter(|c| !c.is_ok())
    }

    pub fn is_ok(&self) -> bool { self.failures().next().is_none() && self.missing.is_empty() }
}

/// True if `actual` is within `margin` (a fraction, e.g. 0.001) of `expected`.
#[inline]
pub fn within_margin(actual: u64, expected: u64, margin: f64) -> bool {
    (actual as f64 - expected as f64).abs() <= expected as f64 * margin
}

/// Check that every apportioned jurisdiction has the expected number of districts, and that
/// for each district size the number of districts whose population lies within `margin` of
/// the representative population equals the expected count for that size.
pub fn verify_catalogue(report: &ApportionmentReport, catalogue: &Catalogue, margin: f64) -> Verification {
    let mut out = Verification::default();

    for row in report.rows() {
        let Some(abbreviation) = row.abbreviation.as_deref() else {
            log::error!("[verify] {}: no abbreviation found", row.state);
            out.unabbreviated.push(row.state.clone());
            continue;
        };

        let populations: Vec<Option<u64>> = catalogue.jurisdiction(abbreviation).map(|d| d.population).collect();
        if populations.is_empty() {
            log::warn!("[verify] {} ({abbreviation}): no districts in catalogue", row.state);
            out.missing.push(row.state.clone());
            continue;
        }

        let size_mismatches = row.district_sizes.iter()
            .filter_map(|(&size, &expected)| {
                let representative = row.district_populations.get(&size).copied().unwrap_or(0);
                let matched = populations.iter()
                    .filter(|p| p.is_some_and(|p| within_margin(p, representative, margin)))
                    .count() as u32;
                (matched != expected).then_some(SizeMismatch { size, expected, matched })
            })
            .collect();

        let check = JurisdictionCheck {
            state: row.state.clone(),
            abbreviation: abbreviation.to_string(),
            expected_districts: row.districts,
            found_districts: populations.len() as u32,
            size_mismatches,
        };

        if check.district_count_ok() {
            log::info!("[verify] {} ({abbreviation}): OK ({} districts)", check.state, check.found_districts);
        } else {
            log::error!(
                "[verify] {} ({abbreviation}): mismatch - expected {}, catalogue {}",
                check.state, check.expected_districts, check.found_districts
            );
        }
        for m in &check.size_mismatches {
            log::error!(
                "[verify] {} ({abbreviation}): population mismatch for {}-member districts - expected {}, actual {}",
                check.state, m.size, m.expected, m.matched
            );
        }

        out.checks.push(check);
    }

    out
}

use crate::apportion::ApportionmentReport;

/// Jurisdictions whose districting differs between two reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDiff {
    /// Present in both, with a different district count or district populations.
    pub changed: Vec<String>,
    pub only_in_left: Vec<String>,
    pub only_in_right: Vec<String>,
}

impl ReportDiff {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.only_in_left.is_empty() && self.only_in_right.is_empty()
    }
}

/// Compare two reports jurisdiction by jurisdiction (matched by name, in `left`'s order).
pub fn diff_reports(left: &ApportionmentReport, right: &ApportionmentReport) -> ReportDiff {
    let mut diff = ReportDiff::default();

    for row in left.rows() {
        match right.get(&row.state) {
            Some(other) => {
                if row.districts != other.districts || row.district_populations != other.district_populations {
                    diff.changed.push(row.state.clone());
                }
            }
            None => diff.only_in_left.push(row.state.clone()),
        }
    }

    diff.only_in_right = right.rows().iter()
        .filter(|row| left.get(&row.state).is_none())
        .map(|row| row.state.clone())
        .collect();

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apportion::huntington_hill, types::Jurisdiction};

    fn report(jurisdictions: &[Jurisdiction], seats: u32) -> ApportionmentReport {
        let apportionment = huntington_hill(jurisdictions, seats).unwrap();
        ApportionmentReport::build(jurisdictions, &apportionment, 6).unwrap()
    }

    #[test]
    fn identical_reports_have_no_diff() {
        let j = [Jurisdiction::new("Ohio", 11_799_448), Jurisdiction::new("Iowa", 3_190_369)];
        assert!(diff_reports(&report(&j, 20), &report(&j, 20)).is_empty());
    }

    #[test]
    fn seat_changes_show_up() {
        let j = [Jurisdiction::new("Ohio", 11_799_448), Jurisdiction::new("Iowa", 3_190_369)];
        let k = [Jurisdiction::new("Ohio", 11_799_448), Jurisdiction::new("Utah", 3_271_616)];
        let diff = diff_reports(&report(&j, 20), &report(&k, 30));
        assert_eq!(diff.changed, ["Ohio"]);
        assert_eq!(diff.only_in_left, ["Iowa"]);
        assert_eq!(diff.only_in_right, ["Utah"]);
    }
}

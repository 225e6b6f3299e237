//! Seat apportionment and multi-member district sizing.

mod diff;
mod huntington_hill;
mod report;
mod resolve;
mod sizes;

pub use diff::{ReportDiff, diff_reports};
pub use huntington_hill::{Apportionment, huntington_hill, priority};
pub use report::{ApportionmentReport, ApportionmentRow};
pub use resolve::{SizeTable, resolve_district, resolve_seats};
pub use sizes::{DistrictSizeGroup, DistrictSizes, MAX_DISTRICT_SIZE, classify, classify_with_max};

use crate::{error::Result, types::Jurisdiction};

/// Apportion `total_seats` and size every jurisdiction's districts in one step.
pub fn apportion(jurisdictions: &[Jurisdiction], total_seats: u32, max_size: u32) -> Result<ApportionmentReport> {
    let apportionment = huntington_hill(jurisdictions, total_seats)?;
    log::info!(
        "[apportion] {} seats across {} jurisdictions",
        apportionment.total(),
        apportionment.len()
    );
    ApportionmentReport::build(jurisdictions, &apportionment, max_size)
}

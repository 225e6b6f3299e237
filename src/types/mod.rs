mod affiliation;
mod district_key;
mod jurisdiction;
mod respondent;

pub use affiliation::{Affiliation, AffiliationSet};
pub use district_key::{DistrictKey, LocalId};
pub use jurisdiction::Jurisdiction;
pub use respondent::{District, Membership, Memberships, Respondent};

//! District catalogue and its verification against an apportionment report.

mod catalogue;
mod verify;

pub use catalogue::Catalogue;
pub use verify::{JurisdictionCheck, SizeMismatch, Verification, verify_catalogue, within_margin};

#![doc = "OpenApportion public API"]
pub mod apportion;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod io;
pub mod states;
pub mod tally;
pub mod types;
pub mod weights;

#[doc(inline)]
pub use apportion::{ApportionmentReport, DistrictSizes, SizeTable, apportion, classify, huntington_hill};

#[doc(inline)]
pub use catalogue::{Catalogue, verify_catalogue};

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use tally::{OutputRow, Tabulation, aggregate, compute_representative_counts, tabulate};

#[doc(inline)]
pub use types::{AffiliationSet, District, DistrictKey, Jurisdiction, Respondent};

#[doc(inline)]
pub use weights::{WeightTable, build_weights};

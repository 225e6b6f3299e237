use crate::types::DistrictKey;

/// Failures raised by the apportionment and resolution algorithms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("cannot apportion {seats} seats across {jurisdictions} jurisdictions (each needs at least one)")]
    InsufficientSeats { seats: u32, jurisdictions: usize },

    #[error("no jurisdictions to apportion")]
    NoJurisdictions,

    #[error("jurisdiction '{0}' listed more than once")]
    DuplicateJurisdiction(String),

    #[error("jurisdiction must hold at least one seat to be divided into districts")]
    InvalidSeats,

    #[error("district {0} not found in catalogue")]
    DistrictNotFound(DistrictKey),

    #[error("district {0} has no population figure and its jurisdiction has several district sizes")]
    PopulationMissing(DistrictKey),

    #[error("jurisdiction '{0}' has no apportionment row")]
    JurisdictionNotApportioned(String),
}

pub type Result<T> = std::result::Result<T, Error>;

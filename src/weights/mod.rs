//! Geography → district weight tables supplied by the overlay step.

mod build;
mod table;

pub use build::{BuildStats, PopulationPiece, build_weights};
pub use table::{
    DistrictWeight, GeographyWeights, RawDistrictId, RawWeightMap, WeightOptions, WeightStats, WeightTable,
};

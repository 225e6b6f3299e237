use anyhow::Result;
use openapportion::{build_weights, io, weights::RawWeightMap};

use crate::cli::{Cli, WeightsArgs};

pub fn run(_cli: &Cli, args: &WeightsArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or("./weights.json".into());

    let existing = match &args.existing {
        Some(path) => io::read_weight_map(path)?,
        None => RawWeightMap::new(),
    };
    let pieces = io::read_population_pieces(&args.pieces)?;
    log::info!("[weights] {} overlay pieces from {}", pieces.len(), args.pieces.display());

    let (map, stats) = build_weights(existing, &pieces);
    println!(
        "[weights] {} geographies added, {} kept, {} without population",
        stats.added, stats.kept, stats.zero_population
    );

    log::info!("[weights] writing {} geographies to {}", map.len(), out_path.display());
    io::write_weight_map(&map, &out_path)
}

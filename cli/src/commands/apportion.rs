use anyhow::Result;
use openapportion::{apportion, io};

use crate::cli::{ApportionArgs, Cli};

pub fn run(cli: &Cli, args: &ApportionArgs) -> Result<()> {
    let mut config = super::load_config(cli)?;
    if let Some(seats) = args.seats { config.total_seats = seats }
    if let Some(max_size) = args.max_size { config.max_district_size = max_size }
    config.include_dc |= args.include_dc;
    config.include_pr |= args.include_pr;
    let out_path = args.output.clone().unwrap_or("./apportionment.json".into());

    log::info!("[apportion] reading populations from {}", args.populations.display());
    let jurisdictions = config.filter_jurisdictions(io::read_jurisdictions(&args.populations)?);

    let report = apportion(&jurisdictions, config.total_seats, config.max_district_size)?;
    for state in report.unabbreviated() {
        log::warn!("[apportion] no abbreviation known for {state}; its districts cannot be matched");
    }

    for row in report.rows() {
        let sizes = row.district_sizes.iter()
            .rev()
            .map(|(size, count)| format!("{count}x{size}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:<24} {:>4} seats {:>4} districts  {sizes}", row.state, row.representatives, row.districts);
    }
    let total = report.total();
    println!("{:<24} {:>4} seats {:>4} districts", total.state, total.representatives, total.districts);

    log::info!("[apportion] writing report to {}", out_path.display());
    report.write_to_json(&out_path)
}

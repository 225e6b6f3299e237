use anyhow::{Context, Result};
use openapportion::{ApportionmentReport, Catalogue, WeightTable, apportion, io, tabulate};

use crate::cli::{Cli, TallyArgs};

pub fn run(cli: &Cli, args: &TallyArgs) -> Result<()> {
    let config = super::load_config(cli)?;
    let out_path = args.output.clone().unwrap_or("./votes.csv".into());

    let report = match (&args.report, &args.populations) {
        (Some(path), _) => ApportionmentReport::read_from_json(path)?,
        (None, Some(path)) => {
            let jurisdictions = config.filter_jurisdictions(io::read_jurisdictions(path)?);
            apportion(&jurisdictions, config.total_seats, config.max_district_size)?
        }
        (None, None) => anyhow::bail!("[tally] either --report or --populations is required"),
    };
    let sizes = report.size_table();

    let raw = io::read_weight_map(&args.weights)?;
    let (weights, weight_stats) = WeightTable::from_raw(&raw, &config.weight_options());
    log::info!("[tally] {} geographies with weights", weights.len());

    let mut catalogue = Catalogue::read_from_path(&args.districts)?;
    catalogue.retain(|district| !config.ignores(district.key.jurisdiction()));
    log::info!("[tally] {} districts in catalogue", catalogue.len());

    let records = io::read_respondents(&args.respondents, &config.columns)?;
    let affiliations = config.affiliation_set(records.iter().map(|r| r.affiliation.as_str()));
    log::info!("[tally] {} respondents, {} affiliations", records.len(), affiliations.len());

    let mut tabulation = tabulate(&records, &weights, &catalogue, &affiliations, &sizes)
        .context("[tally] tabulation failed")?;
    tabulation.summary.weights = weight_stats;

    for (district, err) in tabulation.counts.unresolved() {
        log::warn!("[tally] {district}: {err}");
    }

    log::info!("[tally] writing {} rows to {}", tabulation.rows.len(), out_path.display());
    io::write_output(&tabulation.rows, &out_path)?;
    println!("{}", tabulation.summary);
    Ok(())
}

use anyhow::{Result, bail};
use openapportion::{ApportionmentReport, Catalogue, verify_catalogue};

use crate::cli::{Cli, VerifyArgs};

pub fn run(cli: &Cli, args: &VerifyArgs) -> Result<()> {
    let config = super::load_config(cli)?;
    let margin = args.margin.unwrap_or(config.verify_margin);

    let report = ApportionmentReport::read_from_json(&args.report)?;
    let catalogue = Catalogue::read_from_path(&args.districts)?;
    log::info!("[verify] {} districts in {} jurisdictions", catalogue.len(), catalogue.jurisdictions().len());

    let verification = verify_catalogue(&report, &catalogue, margin);
    for check in verification.failures() {
        println!(
            "{} ({}): {} districts, expected {}",
            check.state, check.abbreviation, check.found_districts, check.expected_districts
        );
        for mismatch in &check.size_mismatches {
            println!(
                "  size {}: {} districts within {:.2}% of the expected population, expected {}",
                mismatch.size, mismatch.matched, margin * 100.0, mismatch.expected
            );
        }
    }
    for state in &verification.missing {
        println!("{state}: no districts found");
    }

    if !verification.is_ok() {
        bail!(
            "[verify] {} jurisdictions failed, {} missing",
            verification.failures().count(),
            verification.missing.len()
        );
    }
    println!("[verify] {} jurisdictions match", verification.checks.len());
    Ok(())
}

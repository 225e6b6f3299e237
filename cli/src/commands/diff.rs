use anyhow::Result;
use openapportion::{ApportionmentReport, apportion::diff_reports};

use crate::cli::{Cli, DiffArgs};

pub fn run(_cli: &Cli, args: &DiffArgs) -> Result<()> {
    let left = ApportionmentReport::read_from_json(&args.left)?;
    let right = ApportionmentReport::read_from_json(&args.right)?;

    let diff = diff_reports(&left, &right);
    if diff.is_empty() {
        println!("[diff] no differences");
        return Ok(());
    }

    for state in &diff.changed {
        let (Some(a), Some(b)) = (left.get(state), right.get(state)) else { continue };
        println!("{state}: {} districts {:?} -> {} districts {:?}", a.districts, a.district_sizes, b.districts, b.district_sizes);
    }
    for state in &diff.only_in_left {
        println!("{state}: only in {}", args.left.display());
    }
    for state in &diff.only_in_right {
        println!("{state}: only in {}", args.right.display());
    }
    Ok(())
}

pub mod apportion;
pub mod diff;
pub mod tally;
pub mod verify;
pub mod weights;

use anyhow::Result;
use openapportion::Config;

/// Config named by `--config`, or defaults.
pub fn load_config(cli: &crate::cli::Cli) -> Result<Config> {
    Config::load(cli.config.as_deref())
}

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{apportion, diff, tally, verify, weights};

/// Default log level from the `-v` count; `RUST_LOG` takes precedence.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Apportion(args) => apportion::run(&cli, args),
        Commands::Weights(args) => weights::run(&cli, args),
        Commands::Verify(args) => verify::run(&cli, args),
        Commands::Diff(args) => diff::run(&cli, args),
        Commands::Tally(args) => tally::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }

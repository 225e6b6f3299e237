use std::path::PathBuf;

/// Multi-member district apportionment and survey tabulation
#[derive(clap::Parser, Debug)]
#[command(name = "openapportion", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON config file; defaults apply to anything it leaves out
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Apportion seats and size each jurisdiction's districts
    Apportion(ApportionArgs),

    /// Build a geography to district weight map from overlay pieces
    Weights(WeightsArgs),

    /// Check a district catalogue against an apportionment report
    Verify(VerifyArgs),

    /// Compare the districting of two apportionment reports
    Diff(DiffArgs),

    /// Aggregate survey respondents into per-district vote totals
    Tally(TallyArgs),
}

#[derive(clap::Args, Debug)]
pub struct ApportionArgs {
    /// Population table with `State` and `Population` columns
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub populations: PathBuf,

    /// Output report, defaults to "./apportionment.json"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Seats to apportion (overrides config)
    #[arg(short, long)]
    pub seats: Option<u32>,

    /// Largest district size (overrides config)
    #[arg(long)]
    pub max_size: Option<u32>,

    /// Apportion seats to the District of Columbia
    #[arg(long)]
    pub include_dc: bool,

    /// Apportion seats to Puerto Rico
    #[arg(long)]
    pub include_pr: bool,
}

#[derive(clap::Args, Debug)]
pub struct WeightsArgs {
    /// Overlay pieces with `ZipCode`, `StateAbbreviation`, `DistrictId` and `POP20` columns
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub pieces: PathBuf,

    /// Existing weight map to extend; its entries are kept as they are
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub existing: Option<PathBuf>,

    /// Output weight map, defaults to "./weights.json"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct VerifyArgs {
    /// Apportionment report
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub report: PathBuf,

    /// GeoJSON file or directory of GeoJSON files
    #[arg(value_hint = clap::ValueHint::AnyPath)]
    pub districts: PathBuf,

    /// Relative population margin (overrides config)
    #[arg(short, long)]
    pub margin: Option<f64>,
}

#[derive(clap::Args, Debug)]
pub struct DiffArgs {
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub left: PathBuf,

    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub right: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct TallyArgs {
    /// Respondent table
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub respondents: PathBuf,

    /// Geography to district weight map
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub weights: PathBuf,

    /// GeoJSON file or directory of GeoJSON files
    #[arg(short, long, value_hint = clap::ValueHint::AnyPath)]
    pub districts: PathBuf,

    /// Apportionment report giving each jurisdiction's district sizes
    #[arg(short, long, value_hint = clap::ValueHint::FilePath, required_unless_present = "populations")]
    pub report: Option<PathBuf>,

    /// Population table to apportion on the fly instead of reading a report
    #[arg(short, long, value_hint = clap::ValueHint::FilePath, conflicts_with = "report")]
    pub populations: Option<PathBuf>,

    /// Output table, defaults to "./votes.csv"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

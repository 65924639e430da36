use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rsslab",
    version,
    about = "Explore body-sensor signal-strength summary data",
    long_about = "Filter and reshape precomputed mean/variance summaries of \n\
                  received-signal-strength time series into chart-ready long \n\
                  format. Dataset paths can also be set via $RSS_MEAN_CSV and \n\
                  $RSS_VARIANCE_CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Produce chart-ready long-format data for one selection
    Chart(ChartArgs),
    /// Summarize a dataset (activities, sensor pairs, subjects)
    Info(InfoArgs),
    /// Validate a pair of summary CSV files
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct DatasetArgs {
    /// Mean summary CSV path
    #[arg(long, env = "RSS_MEAN_CSV")]
    pub mean_csv: String,

    /// Variance summary CSV path
    #[arg(long, env = "RSS_VARIANCE_CSV")]
    pub variance_csv: String,
}

#[derive(Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Measure type: mean or variance
    #[arg(long, default_value = "mean")]
    pub measure: String,

    /// Subject id (1-15 in the reference dataset)
    #[arg(long)]
    pub subject: String,

    /// Activity label matched against column names (e.g. "bending1")
    #[arg(long)]
    pub activity: String,

    /// Sensor pair labels (e.g. "RSS 12" "RSS 13")
    #[arg(long, default_values_t = vec!["RSS 12".to_string()], num_args = 1..)]
    pub sensors: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Compact JSON output (no indentation)
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

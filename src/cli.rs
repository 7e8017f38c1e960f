use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "supeval",
    version,
    about = "Supplier evaluation scoring and summary CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding supeval.toml and the evaluation log
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Preview the weighted score for a set of ratings without saving it
    Score(ScoreCommand),
    /// Record a new supplier evaluation
    Add(AddCommand),
    /// List recorded evaluations, newest first
    List(ListCommand),
    /// Show one evaluation in detail
    Show(ShowCommand),
    /// Averages, top supplier and status distribution
    Summary(SummaryCommand),
}

#[derive(Args, Clone, Copy)]
pub struct RatingArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub quality: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub delivery: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub service: f64,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub ratings: RatingArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct AddCommand {
    #[arg(long)]
    pub supplier: String,
    /// Evaluation date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
    #[command(flatten)]
    pub ratings: RatingArgs,
    #[arg(long)]
    pub comment: Option<String>,
    #[arg(long)]
    pub evaluator: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ListCommand {
    /// Case-insensitive match on supplier or evaluator
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<StatusFilter>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ShowCommand {
    pub id: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct SummaryCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusFilter {
    Excellent,
    #[value(name = "very_good", alias = "very-good")]
    VeryGood,
    Good,
    Deficient,
    Critical,
}

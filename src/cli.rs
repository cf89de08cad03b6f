use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repohealth",
    version,
    about = "Rank open-source repositories by health score instead of popularity"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// JSON dataset to use instead of the configured or bundled one
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    #[arg(short, long, value_enum, global = true)]
    pub format: Option<ReportFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter and sort the dataset
    Rank(RankCommand),
    /// Show a repository's score breakdown
    Score(ScoreCommand),
    /// Compare up to three repositories side by side
    Compare(CompareCommand),
    /// Repositories with the most good first issues
    Recommend,
    /// Repositories in the same language as the given one
    Similar(SimilarCommand),
    /// Run a debounced search against the dataset
    Search(SearchCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortBy {
    Health,
    Stars,
    Activity,
    Issues,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Allowed language (repeatable, case-insensitive)
    #[arg(long = "language", short = 'l')]
    pub languages: Vec<String>,
    /// Last commit within this many days
    #[arg(long)]
    pub activity_days: Option<u32>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_health: Option<u8>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub max_health: Option<u8>,
    /// Minimum number of good first issues
    #[arg(long)]
    pub min_issues: Option<u32>,
    #[arg(long)]
    pub good_first_issues: bool,
    #[arg(long)]
    pub ci_passing: bool,
    #[arg(long)]
    pub has_docs: bool,
    #[arg(long)]
    pub license: Option<String>,
}

#[derive(Args)]
pub struct RankCommand {
    #[command(flatten)]
    pub filters: FilterArgs,
    #[arg(long, value_enum, default_value = "health")]
    pub sort: SortBy,
    /// Evaluate relative commit times against this RFC 3339 instant
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Repository id or name
    pub repo: String,
}

#[derive(Args)]
pub struct CompareCommand {
    /// Repository ids or names, in slot order
    #[arg(required = true)]
    pub repos: Vec<String>,
}

#[derive(Args)]
pub struct SimilarCommand {
    /// Repository id or name
    pub repo: String,
}

#[derive(Args)]
pub struct SearchCommand {
    pub query: String,
    #[command(flatten)]
    pub filters: FilterArgs,
    #[arg(long, value_enum, default_value = "health")]
    pub sort: SortBy,
    /// Evaluate relative commit times against this RFC 3339 instant
    #[arg(long)]
    pub now: Option<String>,
}

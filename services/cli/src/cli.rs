use crate::commands::{run_rank, run_score, run_weights, RankArgs, ScoreArgs, WeightsArgs};
use clap::{Parser, Subcommand};
use maid_match::config::AppConfig;
use maid_match::error::AppError;
use maid_match::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "maid-match",
    about = "Score and shortlist domestic worker candidates against client requirements",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every row of a single-sheet client/candidate pair table
    Score(ScoreArgs),
    /// Rank a candidate pool against each client and keep the best matches
    Rank(RankArgs),
    /// Print the effective weight configuration as JSON
    Weights(WeightsArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    match cli.command {
        Command::Score(args) => run_score(args, &config),
        Command::Rank(args) => run_rank(args, &config),
        Command::Weights(args) => run_weights(args, &config),
    }
}

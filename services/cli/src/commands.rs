use crate::render::{render_explanation, render_shortlists};
use clap::Args;
use maid_match::config::AppConfig;
use maid_match::error::AppError;
use maid_match::matching::export::{write_rows, write_rows_to_path};
use maid_match::matching::ingest::{candidates_from_path, clients_from_path, pairs_from_path};
use maid_match::matching::{MatchEngine, MatchResult, MatchRow, ScoreSummary};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV holding client and candidate columns on the same row
    #[arg(long)]
    pub(crate) pairs: PathBuf,
    /// JSON weight file; overrides MATCH_WEIGHTS_FILE
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
    /// Write the scored rows to this CSV instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Print the grouped explanation for the first N pairs
    #[arg(long, default_value_t = 0)]
    pub(crate) explain: usize,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// CSV of client preferences
    #[arg(long)]
    pub(crate) clients: PathBuf,
    /// CSV of candidate profiles
    #[arg(long)]
    pub(crate) candidates: PathBuf,
    /// Matches kept per client (defaults to MATCH_TOP_K)
    #[arg(long)]
    pub(crate) top_k: Option<usize>,
    /// JSON weight file; overrides MATCH_WEIGHTS_FILE
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
    /// Write the shortlists to this CSV
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct WeightsArgs {
    /// JSON weight file to merge over the defaults
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let ScoreArgs {
        pairs,
        weights,
        output,
        explain,
    } = args;

    let engine = MatchEngine::new(config.matching.weights(weights.as_deref())?)?;
    let pairs = pairs_from_path(&pairs)?;
    let results: Vec<MatchResult> = pairs
        .iter()
        .map(|pair| engine.score_pair(&pair.client, &pair.candidate))
        .collect();
    info!(pairs = results.len(), "scored pair table");

    let mut report = String::new();
    for result in results.iter().take(explain) {
        report.push_str(&render_explanation(result));
        report.push_str("\n\n");
    }
    report.push_str(&ScoreSummary::from_results(&results).to_string());

    let rows: Vec<MatchRow> = results
        .iter()
        .map(|result| MatchRow::from_result(result, None))
        .collect();
    deliver_score(
        &report,
        &rows,
        output.as_deref(),
        std::io::stdout().lock(),
        std::io::stderr().lock(),
    )
}

/// Rows on stdout push the human-readable report to stderr.
fn deliver_score<O: Write, E: Write>(
    report: &str,
    rows: &[MatchRow],
    output: Option<&Path>,
    mut stdout: O,
    mut stderr: E,
) -> Result<(), AppError> {
    match output {
        Some(path) => {
            writeln!(stdout, "{report}")?;
            emit_rows(path, rows)
        }
        None => {
            writeln!(stderr, "{report}")?;
            write_rows(stdout, rows)?;
            Ok(())
        }
    }
}

pub(crate) fn run_rank(args: RankArgs, config: &AppConfig) -> Result<(), AppError> {
    let RankArgs {
        clients,
        candidates,
        top_k,
        weights,
        output,
    } = args;

    let engine = MatchEngine::new(config.matching.weights(weights.as_deref())?)?;
    let clients = clients_from_path(&clients)?;
    let candidates = candidates_from_path(&candidates)?;
    let top_k = top_k.unwrap_or(config.matching.top_k);

    let sets = engine.rank_pool(&clients, &candidates, top_k);
    info!(
        clients = clients.len(),
        candidates = candidates.len(),
        top_k,
        "ranked candidate pool"
    );

    println!("{}", render_shortlists(&sets));
    let shortlisted = sets
        .iter()
        .flat_map(|set| set.matches.iter().map(|ranked| &ranked.result));
    println!("{}", ScoreSummary::from_results(shortlisted));

    match output {
        Some(path) => emit_rows(&path, &MatchRow::from_ranked(&sets)),
        None => Ok(()),
    }
}

pub(crate) fn run_weights(args: WeightsArgs, config: &AppConfig) -> Result<(), AppError> {
    let weights = config.matching.weights(args.weights.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&weights)?);
    Ok(())
}

fn emit_rows(path: &Path, rows: &[MatchRow]) -> Result<(), AppError> {
    write_rows_to_path(path, rows)?;
    info!(rows = rows.len(), path = %path.display(), "wrote match export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maid_match::matching::{CandidateProfile, ClientProfile};

    fn scored_rows() -> Vec<MatchRow> {
        let result = MatchEngine::default()
            .score_pair(&ClientProfile::new("c-1"), &CandidateProfile::new("m-1"));
        vec![MatchRow::from_result(&result, None)]
    }

    #[test]
    fn stdout_export_keeps_report_on_stderr() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        deliver_score("scored 1 pairs", &scored_rows(), None, &mut stdout, &mut stderr)
            .expect("rows written");

        let csv = String::from_utf8(stdout).expect("utf8 csv");
        assert!(csv.starts_with("client_id,candidate_id,"));
        assert!(!csv.contains("scored 1 pairs"));
        assert_eq!(String::from_utf8(stderr).expect("utf8 report"), "scored 1 pairs\n");
    }
}

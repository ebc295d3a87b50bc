use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{CandidateId, CandidateProfile, ClientId, ClientProfile};
use super::evaluation::{MatchEngine, MatchResult};
use super::weights::{WeightConfig, WeightConfigError};

pub const DEFAULT_TOP_K: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// 1-based position within the client's shortlist.
    pub rank: usize,
    pub candidate_id: CandidateId,
    pub result: MatchResult,
}

/// Best candidates for one client, highest final score first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatchSet {
    pub client_id: ClientId,
    pub pool_size: usize,
    pub matches: Vec<RankedMatch>,
}

impl RankedMatchSet {
    pub fn best(&self) -> Option<&RankedMatch> {
        self.matches.first()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Orders results by final score descending and keeps at most `top_k`.
///
/// The sort is stable, so equal scores keep candidate input order.
pub fn rank_results(mut results: Vec<MatchResult>, top_k: usize) -> Vec<RankedMatch> {
    results.sort_by(|left, right| right.final_score.total_cmp(&left.final_score));
    results
        .into_iter()
        .take(top_k)
        .enumerate()
        .map(|(index, result)| RankedMatch {
            rank: index + 1,
            candidate_id: result.candidate_id.clone(),
            result,
        })
        .collect()
}

impl MatchEngine {
    pub fn rank_candidates(
        &self,
        client: &ClientProfile,
        candidates: &[CandidateProfile],
        top_k: usize,
    ) -> RankedMatchSet {
        let results = candidates
            .iter()
            .map(|candidate| self.score_pair(client, candidate))
            .collect();
        let matches = rank_results(results, top_k);

        debug!(
            client = %client.client_id.0,
            pool = candidates.len(),
            kept = matches.len(),
            best = matches.first().map(|m| m.result.final_score).unwrap_or_default(),
            "ranked candidate pool"
        );

        RankedMatchSet {
            client_id: client.client_id.clone(),
            pool_size: candidates.len(),
            matches,
        }
    }

    /// Ranks the same candidate pool for every client, preserving client order.
    pub fn rank_pool(
        &self,
        clients: &[ClientProfile],
        candidates: &[CandidateProfile],
        top_k: usize,
    ) -> Vec<RankedMatchSet> {
        clients
            .iter()
            .map(|client| self.rank_candidates(client, candidates, top_k))
            .collect()
    }
}

/// Validates `weights` and returns the `top_k` best candidates for `client`.
pub fn rank_candidates(
    client: &ClientProfile,
    candidates: &[CandidateProfile],
    weights: &WeightConfig,
    top_k: usize,
) -> Result<RankedMatchSet, WeightConfigError> {
    let engine = MatchEngine::new(weights.clone())?;
    Ok(engine.rank_candidates(client, candidates, top_k))
}

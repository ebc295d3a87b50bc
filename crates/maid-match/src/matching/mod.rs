pub mod domain;
pub mod evaluation;
pub mod explanation;
pub mod export;
pub mod ingest;
pub mod normalizer;
pub mod ranking;
pub mod report;
pub mod weights;

#[cfg(test)]
mod tests;

pub use domain::{CandidateId, CandidateProfile, ClientId, ClientProfile};
pub use evaluation::{
    score_pair, Dimension, DimensionOutcome, DimensionResult, MatchEngine, MatchResult,
    Suitability,
};
pub use explanation::{Explanation, ExplanationBucket};
pub use export::{ExportError, MatchRow};
pub use ingest::{IngestError, MatchPair};
pub use ranking::{rank_candidates, RankedMatch, RankedMatchSet, DEFAULT_TOP_K};
pub use report::ScoreSummary;
pub use weights::{
    BonusPolicy, PenaltyUnit, RefusalPolicy, WeightConfig, WeightConfigError,
};

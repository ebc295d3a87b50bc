mod bonus;
mod penalties;
mod policy;
pub(crate) mod rules;

pub use bonus::{evaluate_bonuses, BonusAward, BonusSummary, BonusTrait};
pub use penalties::{PenaltyApplied, PenaltyKind};
pub use policy::Suitability;
pub use rules::{
    cuisine_credit, score_cuisine, score_dayoff, score_household, score_living,
    score_nationality, score_pets, score_special_care, DimensionScore, RefusalRule,
};

use super::domain::{CandidateId, CandidateProfile, ClientId, ClientProfile};
use super::explanation::Explanation;
use super::weights::{DimensionWeights, WeightConfig, WeightConfigError};
use policy::decide_suitability;
use serde::{Deserialize, Serialize};

/// Independently scored preference axis, listed in explanation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Household,
    SpecialCare,
    Pets,
    DayOff,
    Living,
    Nationality,
    Cuisine,
}

impl Dimension {
    pub const fn ordered() -> [Dimension; 7] {
        [
            Dimension::Household,
            Dimension::SpecialCare,
            Dimension::Pets,
            Dimension::DayOff,
            Dimension::Living,
            Dimension::Nationality,
            Dimension::Cuisine,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Household => "household",
            Dimension::SpecialCare => "special_cases",
            Dimension::Pets => "pets",
            Dimension::DayOff => "dayoff",
            Dimension::Living => "living",
            Dimension::Nationality => "nationality",
            Dimension::Cuisine => "cuisine",
        }
    }

    /// Dimensions whose mismatch makes a candidate unsuitable.
    pub const fn is_hard_requirement(self) -> bool {
        matches!(
            self,
            Dimension::Household | Dimension::Pets | Dimension::Living | Dimension::Nationality
        )
    }

    pub fn weight(self, weights: &DimensionWeights) -> f64 {
        match self {
            Dimension::Household => weights.household,
            Dimension::SpecialCare => weights.special_cases,
            Dimension::Pets => weights.pets,
            Dimension::DayOff => weights.dayoff,
            Dimension::Living => weights.living,
            Dimension::Nationality => weights.nationality,
            Dimension::Cuisine => weights.cuisine,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionOutcome {
    Matched,
    Partial,
    /// Refusal outweighed by demonstrated experience.
    Override,
    Mismatch,
    NotSpecified,
}

/// Discrete contribution of one dimension, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionResult {
    pub dimension: Dimension,
    pub weight: f64,
    pub contribution: Option<f64>,
    pub outcome: DimensionOutcome,
    pub reason: String,
}

/// Score and decision trail for one client/candidate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub client_id: ClientId,
    pub candidate_id: CandidateId,
    pub dimensions: Vec<DimensionResult>,
    pub penalties: Vec<PenaltyApplied>,
    pub bonuses: Vec<BonusAward>,
    pub earned: f64,
    pub applicable_max: f64,
    pub requirement_pct: f64,
    pub penalty_points: f64,
    pub bonus_points: f64,
    pub final_score: f64,
    pub suitability: Suitability,
}

impl MatchResult {
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionResult> {
        self.dimensions
            .iter()
            .find(|result| result.dimension == dimension)
    }

    pub fn reason(&self, dimension: Dimension) -> Option<&str> {
        self.dimension(dimension).map(|result| result.reason.as_str())
    }

    pub fn contribution(&self, dimension: Dimension) -> Option<f64> {
        self.dimension(dimension).and_then(|result| result.contribution)
    }

    pub fn explain(&self) -> Explanation {
        Explanation::from_result(self)
    }
}

/// Stateless evaluator holding a validated weight configuration.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    weights: WeightConfig,
}

impl MatchEngine {
    pub fn new(weights: WeightConfig) -> Result<Self, WeightConfigError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn score_pair(&self, client: &ClientProfile, candidate: &CandidateProfile) -> MatchResult {
        aggregate(client, candidate, &self.weights)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self {
            weights: WeightConfig::standard(),
        }
    }
}

/// Validates `weights` and scores a single pair.
pub fn score_pair(
    client: &ClientProfile,
    candidate: &CandidateProfile,
    weights: &WeightConfig,
) -> Result<MatchResult, WeightConfigError> {
    weights.validate()?;
    Ok(aggregate(client, candidate, weights))
}

fn aggregate(
    client: &ClientProfile,
    candidate: &CandidateProfile,
    weights: &WeightConfig,
) -> MatchResult {
    let dimensions = rules::score_dimensions(client, candidate, weights);

    let (earned, applicable_max) = dimensions
        .iter()
        .filter_map(|result| result.contribution.map(|earned| (earned, result.weight)))
        .fold((0.0, 0.0), |(earned, max), (contribution, weight)| {
            (earned + contribution, max + weight)
        });

    let requirement_pct = if applicable_max > 0.0 {
        earned / applicable_max * 100.0
    } else {
        0.0
    };

    let penalties = penalties::evaluate_penalties(candidate, &weights.penalties);
    let penalty_points: f64 = penalties.iter().map(|penalty| penalty.points).sum();

    let bonus = evaluate_bonuses(client, candidate, &weights.bonuses);

    let final_score = (requirement_pct - penalty_points + bonus.total).clamp(0.0, 100.0);
    let suitability = decide_suitability(&dimensions);

    MatchResult {
        client_id: client.client_id.clone(),
        candidate_id: candidate.candidate_id.clone(),
        dimensions,
        penalties,
        bonuses: bonus.awards,
        earned,
        applicable_max,
        requirement_pct,
        penalty_points,
        bonus_points: bonus.total,
        final_score,
        suitability,
    }
}

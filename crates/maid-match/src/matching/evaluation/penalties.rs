use serde::{Deserialize, Serialize};

use super::super::domain::{CandidateProfile, SmokingStatus};
use super::super::weights::PenaltyWeights;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyKind {
    Smoking,
    Attitude,
}

/// Universal red flag deducted regardless of what the client asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyApplied {
    pub kind: PenaltyKind,
    pub points: f64,
    pub reason: String,
}

pub(crate) fn evaluate_penalties(
    candidate: &CandidateProfile,
    weights: &PenaltyWeights,
) -> Vec<PenaltyApplied> {
    let mut penalties = Vec::new();

    let smoking_reason = match candidate.smoking {
        SmokingStatus::Smoker => Some("Maid is a smoker (penalty)."),
        SmokingStatus::Unspecified if weights.penalize_unstated_smoking => {
            Some("Maid did not state smoking status (penalty).")
        }
        _ => None,
    };
    if let Some(reason) = smoking_reason {
        if weights.smoking > 0.0 {
            penalties.push(PenaltyApplied {
                kind: PenaltyKind::Smoking,
                points: weights.unit.to_points(weights.smoking),
                reason: reason.to_string(),
            });
        }
    }

    if candidate.personality.contains("bad_attitude") && weights.attitude > 0.0 {
        penalties.push(PenaltyApplied {
            kind: PenaltyKind::Attitude,
            points: weights.unit.to_points(weights.attitude),
            reason: "Maid shows negative attitude (penalty).".to_string(),
        });
    }

    penalties
}

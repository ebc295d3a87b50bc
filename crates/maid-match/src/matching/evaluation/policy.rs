use serde::{Deserialize, Serialize};

use super::{DimensionOutcome, DimensionResult};

/// Binary verdict derived from hard mismatches on stated requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suitability {
    Suitable,
    NotSuitable,
}

impl Suitability {
    pub const fn label(self) -> &'static str {
        match self {
            Suitability::Suitable => "Suitable",
            Suitability::NotSuitable => "Not Suitable",
        }
    }

    pub const fn is_suitable(self) -> bool {
        matches!(self, Suitability::Suitable)
    }
}

pub(crate) fn decide_suitability(dimensions: &[DimensionResult]) -> Suitability {
    let hard_mismatch = dimensions.iter().any(|result| {
        result.dimension.is_hard_requirement() && result.outcome == DimensionOutcome::Mismatch
    });

    if hard_mismatch {
        Suitability::NotSuitable
    } else {
        Suitability::Suitable
    }
}

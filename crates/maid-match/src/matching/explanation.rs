use serde::Serialize;

use super::evaluation::{DimensionOutcome, MatchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationBucket {
    Matched,
    Penalties,
    Bonuses,
    NotSpecified,
}

impl ExplanationBucket {
    pub const fn ordered() -> [ExplanationBucket; 4] {
        [
            ExplanationBucket::Matched,
            ExplanationBucket::Penalties,
            ExplanationBucket::Bonuses,
            ExplanationBucket::NotSpecified,
        ]
    }

    pub const fn heading(self) -> &'static str {
        match self {
            ExplanationBucket::Matched => "Requirements matched",
            ExplanationBucket::Penalties => "Penalties / mismatches",
            ExplanationBucket::Bonuses => "Bonus traits",
            ExplanationBucket::NotSpecified => "Not specified by client",
        }
    }

    const fn separator(self) -> &'static str {
        match self {
            ExplanationBucket::Bonuses => ", ",
            _ => "; ",
        }
    }
}

/// Reason strings grouped for display, in evaluator order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub matched: Vec<String>,
    pub penalties: Vec<String>,
    pub bonuses: Vec<String>,
    pub not_specified: Vec<String>,
}

impl Explanation {
    pub fn from_result(result: &MatchResult) -> Self {
        let mut explanation = Explanation::default();

        for dimension in &result.dimensions {
            let bucket = match dimension.outcome {
                DimensionOutcome::Matched
                | DimensionOutcome::Partial
                | DimensionOutcome::Override => &mut explanation.matched,
                DimensionOutcome::Mismatch => &mut explanation.penalties,
                DimensionOutcome::NotSpecified => &mut explanation.not_specified,
            };
            bucket.push(dimension.reason.clone());
        }

        explanation.penalties.extend(
            result
                .penalties
                .iter()
                .map(|penalty| penalty.reason.clone()),
        );
        explanation.bonuses = result
            .bonuses
            .iter()
            .map(|bonus| bonus.reason.clone())
            .collect();

        explanation
    }

    pub fn entries(&self, bucket: ExplanationBucket) -> &[String] {
        match bucket {
            ExplanationBucket::Matched => &self.matched,
            ExplanationBucket::Penalties => &self.penalties,
            ExplanationBucket::Bonuses => &self.bonuses,
            ExplanationBucket::NotSpecified => &self.not_specified,
        }
    }

    /// Bucket entries joined with the bucket separator; empty when nothing triggered.
    pub fn joined(&self, bucket: ExplanationBucket) -> String {
        self.entries(bucket).join(bucket.separator())
    }

    pub fn render(&self) -> String {
        ExplanationBucket::ordered()
            .into_iter()
            .map(|bucket| {
                let joined = self.joined(bucket);
                let body = if joined.is_empty() { "None" } else { joined.as_str() };
                format!("{}: {}", bucket.heading(), body)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

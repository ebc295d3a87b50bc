use serde::Serialize;
use std::fmt;

use super::evaluation::MatchResult;

const BUCKETS: usize = 10;

/// Distribution of final scores across a scored batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Counts per 10-point band; the last band also holds perfect scores.
    pub buckets: [usize; BUCKETS],
    pub suitable: usize,
}

impl ScoreSummary {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a MatchResult>,
    {
        let mut scores = Vec::new();
        let mut suitable = 0;
        for result in results {
            scores.push(result.final_score);
            if result.suitability.is_suitable() {
                suitable += 1;
            }
        }
        Self::from_scores(scores, suitable)
    }

    fn from_scores(mut scores: Vec<f64>, suitable: usize) -> Self {
        let mut buckets = [0; BUCKETS];
        if scores.is_empty() {
            return Self {
                count: 0,
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                median: 0.0,
                buckets,
                suitable,
            };
        }

        scores.sort_by(f64::total_cmp);
        for score in &scores {
            let band = ((score / 10.0).floor().max(0.0) as usize).min(BUCKETS - 1);
            buckets[band] += 1;
        }

        let count = scores.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (scores[mid - 1] + scores[mid]) / 2.0
        } else {
            scores[mid]
        };

        Self {
            count,
            min: scores[0],
            max: scores[count - 1],
            mean: scores.iter().sum::<f64>() / count as f64,
            median,
            buckets,
            suitable,
        }
    }
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "scored {} pairs ({} suitable): min {:.1}, max {:.1}, mean {:.1}, median {:.1}",
            self.count, self.suitable, self.min, self.max, self.mean, self.median
        )?;
        for (index, count) in self.buckets.iter().enumerate() {
            let low = index * 10;
            let high = low + 10;
            let close = if index == BUCKETS - 1 { ']' } else { ')' };
            writeln!(f, "  [{low:>3}, {high:>3}{close} {count}")?;
        }
        Ok(())
    }
}

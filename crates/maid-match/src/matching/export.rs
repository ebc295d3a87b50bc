use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use super::evaluation::{Dimension, MatchResult};
use super::explanation::ExplanationBucket;
use super::ranking::RankedMatchSet;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write match export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode match export: {0}")]
    Csv(#[from] csv::Error),
}

/// Flat, spreadsheet-friendly view of one scored pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub client_id: String,
    pub candidate_id: String,
    pub rank: Option<usize>,
    pub final_score: f64,
    pub requirement_pct: f64,
    pub suitability: String,
    pub household: String,
    pub special_cases: String,
    pub pets: String,
    pub dayoff: String,
    pub living: String,
    pub nationality: String,
    pub cuisine: String,
    pub requirements: String,
    pub penalties: String,
    pub bonuses: String,
    pub not_specified: String,
}

impl MatchRow {
    pub fn from_result(result: &MatchResult, rank: Option<usize>) -> Self {
        let reason =
            |dimension: Dimension| result.reason(dimension).unwrap_or_default().to_string();
        let explanation = result.explain();

        Self {
            client_id: result.client_id.0.clone(),
            candidate_id: result.candidate_id.0.clone(),
            rank,
            final_score: round2(result.final_score),
            requirement_pct: round2(result.requirement_pct),
            suitability: result.suitability.label().to_string(),
            household: reason(Dimension::Household),
            special_cases: reason(Dimension::SpecialCare),
            pets: reason(Dimension::Pets),
            dayoff: reason(Dimension::DayOff),
            living: reason(Dimension::Living),
            nationality: reason(Dimension::Nationality),
            cuisine: reason(Dimension::Cuisine),
            requirements: explanation.joined(ExplanationBucket::Matched),
            penalties: explanation.joined(ExplanationBucket::Penalties),
            bonuses: explanation.joined(ExplanationBucket::Bonuses),
            not_specified: explanation.joined(ExplanationBucket::NotSpecified),
        }
    }

    pub fn from_ranked(sets: &[RankedMatchSet]) -> Vec<Self> {
        sets.iter()
            .flat_map(|set| set.matches.iter())
            .map(|ranked| Self::from_result(&ranked.result, Some(ranked.rank)))
            .collect()
    }
}

pub fn write_rows<W: Write>(writer: W, rows: &[MatchRow]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_rows_to_path<P: AsRef<Path>>(path: P, rows: &[MatchRow]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_rows(file, rows)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

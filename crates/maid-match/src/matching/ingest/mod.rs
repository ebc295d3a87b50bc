mod parser;

use std::io::Read;
use std::path::Path;

use super::domain::{CandidateProfile, ClientProfile};
use parser::{language_flags, reader_for, CandidateRow, ClientRow};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read match table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid match table CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of a single-sheet table holding both sides of a pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPair {
    pub client: ClientProfile,
    pub candidate: CandidateProfile,
}

pub fn parse_clients<R: Read>(reader: R) -> Result<Vec<ClientProfile>, IngestError> {
    let mut csv_reader = reader_for(reader);
    let mut clients = Vec::new();

    for (index, row) in csv_reader.deserialize::<ClientRow>().enumerate() {
        clients.push(row?.into_profile(index + 1));
    }

    Ok(clients)
}

pub fn parse_candidates<R: Read>(reader: R) -> Result<Vec<CandidateProfile>, IngestError> {
    let mut csv_reader = reader_for(reader);
    let headers = csv_reader.headers()?.clone();
    let mut candidates = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row: CandidateRow = record.deserialize(Some(&headers))?;
        candidates.push(row.into_profile(index + 1, language_flags(&headers, &record)));
    }

    Ok(candidates)
}

/// Reads each row twice, once per side, so both column sets can share a line.
pub fn parse_pairs<R: Read>(reader: R) -> Result<Vec<MatchPair>, IngestError> {
    let mut csv_reader = reader_for(reader);
    let headers = csv_reader.headers()?.clone();
    let mut pairs = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let client: ClientRow = record.deserialize(Some(&headers))?;
        let candidate: CandidateRow = record.deserialize(Some(&headers))?;
        pairs.push(MatchPair {
            client: client.into_profile(index + 1),
            candidate: candidate.into_profile(index + 1, language_flags(&headers, &record)),
        });
    }

    Ok(pairs)
}

pub fn clients_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ClientProfile>, IngestError> {
    parse_clients(std::fs::File::open(path)?)
}

pub fn candidates_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<CandidateProfile>, IngestError> {
    parse_candidates(std::fs::File::open(path)?)
}

pub fn pairs_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<MatchPair>, IngestError> {
    parse_pairs(std::fs::File::open(path)?)
}

#[cfg(test)]
pub(crate) fn count_for_tests(value: &str) -> u32 {
    parser::count_for_tests(value)
}

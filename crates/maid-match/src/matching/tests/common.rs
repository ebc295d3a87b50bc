use crate::matching::domain::{
    CandidateProfile, CareNeed, CareProfile, ClientProfile, DayOffRequest, HouseholdNeed,
    KidsExperience, NationalityPreference, PetHandling, PetNeed, SmokingStatus,
};
use crate::matching::evaluation::{MatchEngine, MatchResult, Suitability};
use crate::matching::normalizer::TokenSet;
use crate::matching::weights::WeightConfig;
use crate::matching::{CandidateId, ClientId};

pub(super) fn engine() -> MatchEngine {
    MatchEngine::new(WeightConfig::standard()).expect("standard weights are valid")
}

/// Client that states nothing at all.
pub(super) fn blank_client(id: &str) -> ClientProfile {
    ClientProfile::new(id)
}

/// Non-smoking candidate with nothing else stated.
pub(super) fn plain_candidate(id: &str) -> CandidateProfile {
    let mut candidate = CandidateProfile::new(id);
    candidate.smoking = SmokingStatus::NonSmoker;
    candidate
}

pub(super) fn smoker_candidate(id: &str) -> CandidateProfile {
    let mut candidate = CandidateProfile::new(id);
    candidate.smoking = SmokingStatus::Smoker;
    candidate
}

/// Standard weights without the non-smoker bonus, so a plain candidate scores requirements only.
pub(super) fn neutral_weights() -> WeightConfig {
    let mut weights = WeightConfig::standard();
    weights.bonuses.non_smoker = 0.0;
    weights
}

pub(super) fn family_client(id: &str) -> ClientProfile {
    ClientProfile {
        household: HouseholdNeed::Baby,
        special_cases: CareNeed::Elderly,
        pets: PetNeed::Cat,
        dayoff: DayOffRequest::from_token("sunday"),
        living: TokenSet::parse("private_room"),
        nationality: NationalityPreference::from_token("filipina"),
        cuisine: TokenSet::parse("lebanese+khaleeji"),
        ..ClientProfile::new(id)
    }
}

/// Candidate that satisfies every requirement of [`family_client`].
pub(super) fn ideal_candidate(id: &str) -> CandidateProfile {
    CandidateProfile {
        kids_experience: KidsExperience::Both,
        caregiving: CareProfile::Elderly,
        pet_handling: PetHandling::Both,
        nationality: Some("filipina".to_string()),
        cuisines: TokenSet::parse("lebanese+khaleeji"),
        ..plain_candidate(id)
    }
}

pub(super) fn synthetic_result(candidate: &str, final_score: f64) -> MatchResult {
    MatchResult {
        client_id: ClientId("c-1".to_string()),
        candidate_id: CandidateId(candidate.to_string()),
        dimensions: Vec::new(),
        penalties: Vec::new(),
        bonuses: Vec::new(),
        earned: 0.0,
        applicable_max: 0.0,
        requirement_pct: final_score,
        penalty_points: 0.0,
        bonus_points: 0.0,
        final_score,
        suitability: Suitability::Suitable,
    }
}

pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

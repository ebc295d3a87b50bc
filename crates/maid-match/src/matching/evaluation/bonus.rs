use serde::{Deserialize, Serialize};

use super::super::domain::{
    CandidateProfile, CareNeed, ClientProfile, SmokingStatus, TravelFlexibility,
};
use super::super::normalizer::normalize_token;
use super::super::weights::{BonusPolicy, BonusWeights};

const PERSONALITY_TRAITS: &[(&str, &str)] = &[
    ("polite", "Polite"),
    ("energetic", "Energetic"),
    ("cooperative", "Cooperative"),
    ("veg_friendly", "Veg-friendly"),
    ("no_attitude", "Does not have attitude"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusTrait {
    Multilingual,
    Experience,
    Education,
    Personality,
    Travel,
    NonSmoker,
    Caregiving,
    MultiCuisine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusAward {
    pub kind: BonusTrait,
    pub points: f64,
    pub reason: String,
}

/// Triggered bonus traits with the raw and capped totals.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusSummary {
    pub awards: Vec<BonusAward>,
    pub raw_total: f64,
    pub total: f64,
}

struct Awards {
    awards: Vec<BonusAward>,
}

impl Awards {
    fn push(&mut self, kind: BonusTrait, points: f64, reason: impl Into<String>) {
        if points > 0.0 {
            self.awards.push(BonusAward {
                kind,
                points,
                reason: reason.into(),
            });
        }
    }
}

pub fn evaluate_bonuses(
    client: &ClientProfile,
    candidate: &CandidateProfile,
    weights: &BonusWeights,
) -> BonusSummary {
    let aware = weights.policy == BonusPolicy::RequirementAware;
    let mut awards = Awards { awards: Vec::new() };

    let languages = candidate.spoken_languages();
    if languages > 1 {
        awards.push(
            BonusTrait::Multilingual,
            weights.multilingual,
            format!("Speaks {languages} languages"),
        );
    }

    match candidate.years_of_experience {
        years if years >= 5 => awards.push(
            BonusTrait::Experience,
            weights.experience_five_years,
            format!("{years} years of experience (5+ tier)"),
        ),
        years if years >= 2 => awards.push(
            BonusTrait::Experience,
            weights.experience_two_years,
            format!("{years} years of experience (2+ tier)"),
        ),
        _ => {}
    }

    if let Some(level) = candidate.education.as_deref() {
        let eligible = match &weights.education_levels {
            None => true,
            Some(levels) => levels.iter().any(|accepted| normalize_token(accepted) == level),
        };
        if eligible {
            awards.push(
                BonusTrait::Education,
                weights.education,
                format!("Education: {level}"),
            );
        }
    }

    let flagged = candidate.personality.contains("bad_attitude");
    for (token, label) in PERSONALITY_TRAITS {
        if *token == "no_attitude" && flagged {
            continue;
        }
        if candidate.personality.contains(token) {
            awards.push(BonusTrait::Personality, weights.personality_trait, *label);
        }
    }

    if !(aware && !client.living.is_empty()) {
        match candidate.travel {
            TravelFlexibility::TravelAndRelocate => awards.push(
                BonusTrait::Travel,
                weights.travel_and_relocate,
                "Flexible for travel and relocation",
            ),
            TravelFlexibility::Travel => {
                awards.push(BonusTrait::Travel, weights.travel_or_relocate, "Open to travel")
            }
            TravelFlexibility::Relocate => awards.push(
                BonusTrait::Travel,
                weights.travel_or_relocate,
                "Open to relocation",
            ),
            TravelFlexibility::Unspecified => {}
        }
    }

    if candidate.smoking == SmokingStatus::NonSmoker {
        awards.push(BonusTrait::NonSmoker, weights.non_smoker, "Non-smoker");
    }

    if candidate.caregiving.has_any() && !(aware && client.special_cases != CareNeed::Unspecified)
    {
        awards.push(
            BonusTrait::Caregiving,
            weights.caregiving,
            "Extra caregiving skills",
        );
    }

    let multi_cuisine = candidate
        .cuisines
        .iter()
        .any(|token| token.starts_with("multi"));
    if multi_cuisine && !(aware && !client.cuisine.is_empty()) {
        awards.push(
            BonusTrait::MultiCuisine,
            weights.multi_cuisine,
            "Multi-cuisine experience",
        );
    }

    let raw_total: f64 = awards.awards.iter().map(|award| award.points).sum();
    BonusSummary {
        awards: awards.awards,
        raw_total,
        total: raw_total.min(weights.cap),
    }
}

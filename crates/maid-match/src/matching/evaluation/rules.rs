use super::super::domain::{
    CandidateProfile, CareNeed, CareProfile, ClientProfile, DayOffRequest, HouseholdNeed,
    HouseholdRefusal, KidsExperience, NationalityPreference, PetHandling, PetNeed, PetRefusal,
};
use super::super::normalizer::{normalize_token, TokenSet};
use super::super::weights::{NationalityRules, RefusalPolicy, WeightConfig};
use super::{Dimension, DimensionOutcome, DimensionResult};

const SPECIAL_CARE_PARTIAL: f64 = 0.6;

/// Living requirement aspect paired with the candidate refusal that conflicts with it.
const LIVING_CONFLICTS: &[(&str, &str)] = &[
    ("private_room", "requires_no_private_room"),
    ("abu_dhabi", "refuses_abu_dhabi"),
    ("live_out", "refuses_live_out"),
];

/// Outcome of a single dimension evaluator before it is tagged with its dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScore {
    pub contribution: Option<f64>,
    pub outcome: DimensionOutcome,
    pub reason: String,
}

impl DimensionScore {
    fn matched(weight: f64, reason: impl Into<String>) -> Self {
        Self {
            contribution: Some(weight),
            outcome: DimensionOutcome::Matched,
            reason: reason.into(),
        }
    }

    fn partial(weight: f64, fraction: f64, reason: impl Into<String>) -> Self {
        Self {
            contribution: Some(weight * fraction),
            outcome: DimensionOutcome::Partial,
            reason: reason.into(),
        }
    }

    fn mismatch(reason: impl Into<String>) -> Self {
        Self {
            contribution: Some(0.0),
            outcome: DimensionOutcome::Mismatch,
            reason: reason.into(),
        }
    }

    fn not_specified(reason: impl Into<String>) -> Self {
        Self {
            contribution: None,
            outcome: DimensionOutcome::NotSpecified,
            reason: reason.into(),
        }
    }
}

/// Refusal handling shared by the household and pet evaluators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefusalRule {
    pub policy: RefusalPolicy,
    pub override_multiplier: f64,
}

impl RefusalRule {
    pub fn from_weights(weights: &WeightConfig) -> Self {
        Self {
            policy: weights.refusal_policy,
            override_multiplier: weights.override_multiplier,
        }
    }
}

struct RefusalReasons {
    accepted: String,
    overridden: String,
    refused: String,
    unproven: String,
}

fn resolve_refusal(
    refused: bool,
    covered: bool,
    weight: f64,
    rule: RefusalRule,
    reasons: RefusalReasons,
) -> DimensionScore {
    match (refused, covered) {
        (false, true) => DimensionScore::matched(weight, reasons.accepted),
        (true, true) if rule.policy == RefusalPolicy::ExperienceOverride => DimensionScore {
            contribution: Some(weight * rule.override_multiplier),
            outcome: DimensionOutcome::Override,
            reason: reasons.overridden,
        },
        (true, _) => DimensionScore::mismatch(reasons.refused),
        (false, false) => DimensionScore::mismatch(reasons.unproven),
    }
}

pub fn score_household(
    need: HouseholdNeed,
    refusal: HouseholdRefusal,
    experience: KidsExperience,
    weight: f64,
    rule: RefusalRule,
) -> DimensionScore {
    let (refused, covered) = match need {
        HouseholdNeed::Unspecified => {
            return DimensionScore::not_specified("Client did not specify household type.")
        }
        HouseholdNeed::Baby => (
            refusal == HouseholdRefusal::RefusesBaby,
            matches!(experience, KidsExperience::UnderTwo | KidsExperience::Both),
        ),
        HouseholdNeed::ManyKids => (
            refusal == HouseholdRefusal::RefusesManyKids,
            matches!(experience, KidsExperience::AboveTwo | KidsExperience::Both),
        ),
        HouseholdNeed::BabyAndKids => (
            refusal == HouseholdRefusal::RefusesBabyAndKids,
            experience == KidsExperience::Both,
        ),
    };

    let label = need.label();
    resolve_refusal(
        refused,
        covered,
        weight,
        rule,
        RefusalReasons {
            accepted: format!(
                "Client wants {label}, maid accepts and has matching kids experience."
            ),
            overridden: format!(
                "Client wants {label}, maid refuses it but has matching kids experience (experience override)."
            ),
            refused: format!("Client wants {label}, but maid refuses it."),
            unproven: format!(
                "Client wants {label}, but maid did not specify matching kids experience."
            ),
        },
    )
}

pub fn score_special_care(need: CareNeed, profile: CareProfile, weight: f64) -> DimensionScore {
    let label = need.label();
    let full = match need {
        CareNeed::Unspecified => {
            return DimensionScore::not_specified("Client did not specify special care needs.")
        }
        CareNeed::Elderly => {
            matches!(profile, CareProfile::Elderly | CareProfile::ElderlyAndSpecial)
        }
        CareNeed::SpecialNeeds => matches!(
            profile,
            CareProfile::SpecialNeeds | CareProfile::ElderlyAndSpecial
        ),
        CareNeed::ElderlyAndSpecial => profile == CareProfile::ElderlyAndSpecial,
    };

    if full {
        return DimensionScore::matched(
            weight,
            format!("Client needs {label} care, maid has experience."),
        );
    }

    let overlaps = need == CareNeed::ElderlyAndSpecial
        && matches!(profile, CareProfile::Elderly | CareProfile::SpecialNeeds);
    if overlaps {
        return DimensionScore::partial(
            weight,
            SPECIAL_CARE_PARTIAL,
            format!("Client needs {label} care, maid covers only part of it (partial credit)."),
        );
    }

    DimensionScore::mismatch(format!(
        "Client needs {label} care, maid lacks or did not specify experience."
    ))
}

pub fn score_pets(
    need: PetNeed,
    refusal: PetRefusal,
    handling: PetHandling,
    weight: f64,
    rule: RefusalRule,
) -> DimensionScore {
    let (refused, covered) = match need {
        PetNeed::NoPets => {
            return DimensionScore::not_specified("Client did not specify pet preference.")
        }
        PetNeed::Cat => (
            matches!(refusal, PetRefusal::RefusesCat | PetRefusal::RefusesBoth),
            matches!(handling, PetHandling::Cats | PetHandling::Both),
        ),
        PetNeed::Dog => (
            matches!(refusal, PetRefusal::RefusesDog | PetRefusal::RefusesBoth),
            matches!(handling, PetHandling::Dogs | PetHandling::Both),
        ),
        PetNeed::Both => (refusal != PetRefusal::None, handling == PetHandling::Both),
    };

    let label = need.label();
    resolve_refusal(
        refused,
        covered,
        weight,
        rule,
        RefusalReasons {
            accepted: format!("Client has {label}, maid accepts and can handle them."),
            overridden: format!(
                "Client has {label}, maid refuses them but reports handling experience (experience override)."
            ),
            refused: format!("Client has {label}, but maid refuses them."),
            unproven: format!("Client has {label}, but maid did not specify pet handling."),
        },
    )
}

pub fn score_dayoff(
    request: &DayOffRequest,
    refuses_fixed_sunday: bool,
    weight: f64,
) -> DimensionScore {
    match request {
        DayOffRequest::Unspecified => {
            DimensionScore::not_specified("Client did not specify day-off policy.")
        }
        DayOffRequest::Requested(_) if refuses_fixed_sunday => {
            DimensionScore::mismatch("Day-off policy mismatch: maid refuses a fixed Sunday off.")
        }
        DayOffRequest::Requested(_) => {
            DimensionScore::matched(weight, "Day-off policy is acceptable.")
        }
    }
}

pub fn score_living(requested: &TokenSet, refusals: &TokenSet, weight: f64) -> DimensionScore {
    if requested.is_empty() {
        return DimensionScore::not_specified("Client did not specify living arrangement.");
    }

    let aspects: Vec<(&str, &str)> = LIVING_CONFLICTS
        .iter()
        .copied()
        .filter(|(aspect, _)| requested.iter().any(|token| token.contains(aspect)))
        .collect();

    if aspects.is_empty() {
        return DimensionScore::not_specified(format!(
            "Client living arrangement '{}' is not a recognised requirement.",
            requested.joined()
        ));
    }

    let conflicts: Vec<&str> = aspects
        .iter()
        .filter(|(_, refusal)| refusals.contains(refusal))
        .map(|(aspect, _)| *aspect)
        .collect();

    if conflicts.is_empty() {
        DimensionScore::matched(weight, "Living arrangement accepted.")
    } else {
        DimensionScore::mismatch(format!(
            "Living arrangement mismatch: maid does not accept {}.",
            conflicts.join(", ")
        ))
    }
}

pub fn score_nationality(
    preference: &NationalityPreference,
    candidate: Option<&str>,
    weight: f64,
    rules: &NationalityRules,
) -> DimensionScore {
    let accepted = match preference {
        NationalityPreference::Unspecified => {
            return DimensionScore::not_specified(
                "Client did not specify nationality preference.",
            )
        }
        NationalityPreference::Any => {
            return DimensionScore::matched(weight, "Client accepts any nationality.")
        }
        NationalityPreference::OneOf(accepted) => accepted,
    };

    let Some(nationality) = candidate.filter(|value| !value.is_empty()) else {
        return DimensionScore::mismatch(
            "Nationality preference not matched: maid did not specify nationality.",
        );
    };

    let restricted = rules
        .restricted
        .iter()
        .any(|token| normalize_token(token) == nationality);

    if restricted && rules.restricted_require_any {
        return DimensionScore::mismatch(format!(
            "Nationality preference not matched: {nationality} candidates only match an 'any' preference."
        ));
    }

    if accepted.contains(nationality) {
        return DimensionScore::matched(
            weight,
            format!("Nationality preference matched ({nationality})."),
        );
    }

    if restricted {
        DimensionScore::mismatch(format!(
            "Nationality preference not matched: {nationality} is not listed and only matches an 'any' preference."
        ))
    } else {
        DimensionScore::mismatch(format!(
            "Nationality preference not matched ({nationality} not in {}).",
            accepted.joined()
        ))
    }
}

/// Fraction of the cuisine weight earned for `matches` covered out of `total` requested.
pub fn cuisine_credit(matches: usize, total: usize) -> f64 {
    match (matches, total) {
        (_, 0) | (0, _) => 0.0,
        (m, t) if m >= t => 1.0,
        (1, 2) => 0.6,
        (2, 3) => 0.8,
        (1, 3) => 0.5,
        (m, t) => m as f64 / t as f64,
    }
}

pub fn score_cuisine(requested: &TokenSet, offered: &TokenSet, weight: f64) -> DimensionScore {
    if requested.is_empty() {
        return DimensionScore::not_specified("Client did not specify cuisine preference.");
    }

    let matches = requested.overlap(offered);
    let total = requested.len();
    let credit = cuisine_credit(matches, total);

    if credit >= 1.0 {
        DimensionScore::matched(weight, "Cuisine preference matched.")
    } else if credit <= 0.0 {
        DimensionScore::mismatch("Cuisine preference mismatch or maid unspecified.")
    } else {
        DimensionScore::partial(
            weight,
            credit,
            format!("Cuisine preference partly matched ({matches} of {total})."),
        )
    }
}

/// Runs every dimension evaluator in explanation order.
pub(crate) fn score_dimensions(
    client: &ClientProfile,
    candidate: &CandidateProfile,
    weights: &WeightConfig,
) -> Vec<DimensionResult> {
    let rule = RefusalRule::from_weights(weights);

    Dimension::ordered()
        .into_iter()
        .map(|dimension| {
            let weight = dimension.weight(&weights.dimensions);
            let score = match dimension {
                Dimension::Household => score_household(
                    client.household,
                    candidate.household_refusal,
                    candidate.kids_experience,
                    weight,
                    rule,
                ),
                Dimension::SpecialCare => {
                    score_special_care(client.special_cases, candidate.caregiving, weight)
                }
                Dimension::Pets => score_pets(
                    client.pets,
                    candidate.pet_refusal,
                    candidate.pet_handling,
                    weight,
                    rule,
                ),
                Dimension::DayOff => {
                    score_dayoff(&client.dayoff, candidate.refuses_fixed_sunday, weight)
                }
                Dimension::Living => {
                    score_living(&client.living, &candidate.living_refusals, weight)
                }
                Dimension::Nationality => score_nationality(
                    &client.nationality,
                    candidate.nationality.as_deref(),
                    weight,
                    &weights.nationality,
                ),
                Dimension::Cuisine => score_cuisine(&client.cuisine, &candidate.cuisines, weight),
            };

            DimensionResult {
                dimension,
                weight,
                contribution: score.contribution,
                outcome: score.outcome,
                reason: score.reason,
            }
        })
        .collect()
}

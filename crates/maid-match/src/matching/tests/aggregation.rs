use super::common::*;
use crate::matching::domain::{
    CandidateProfile, HouseholdNeed, HouseholdRefusal, KidsExperience, SmokingStatus,
    TravelFlexibility,
};
use crate::matching::evaluation::{
    evaluate_bonuses, BonusTrait, Dimension, DimensionOutcome, MatchEngine, PenaltyKind,
    Suitability,
};
use crate::matching::explanation::ExplanationBucket;
use crate::matching::normalizer::TokenSet;
use crate::matching::score_pair;
use crate::matching::weights::{
    BonusPolicy, PenaltyUnit, RefusalPolicy, WeightConfig, WeightConfigError,
};

#[test]
fn ideal_candidate_scores_full_requirements() {
    let engine = MatchEngine::new(neutral_weights()).expect("valid weights");
    let result = engine.score_pair(&family_client("c-1"), &ideal_candidate("m-1"));

    assert!(approx_eq(result.requirement_pct, 100.0));
    assert!(approx_eq(result.final_score, 100.0));
    assert!(approx_eq(result.applicable_max, 3.8));
    assert_eq!(result.suitability, Suitability::Suitable);
    assert!(result.penalties.is_empty());
    assert!(result.bonuses.is_empty(), "caregiving is covered by the stated care need");
}

#[test]
fn client_without_preferences_has_zero_base() {
    let neutral = MatchEngine::new(neutral_weights()).expect("valid weights");
    let result = neutral.score_pair(&blank_client("c-1"), &plain_candidate("m-1"));

    assert_eq!(result.applicable_max, 0.0);
    assert_eq!(result.requirement_pct, 0.0);
    assert_eq!(result.final_score, 0.0);
    assert!(result
        .dimensions
        .iter()
        .all(|dimension| dimension.outcome == DimensionOutcome::NotSpecified));

    let bonus_only = engine().score_pair(&blank_client("c-1"), &plain_candidate("m-1"));
    assert_eq!(bonus_only.final_score, 2.0);
}

#[test]
fn final_score_is_clamped_to_percentage_range() {
    let mut troubled = smoker_candidate("m-low");
    troubled.personality = TokenSet::parse("bad_attitude");
    let low = engine().score_pair(&family_client("c-1"), &troubled);
    assert_eq!(low.final_score, 0.0);
    assert!(approx_eq(low.penalty_points, 60.0));

    let high = engine().score_pair(&family_client("c-1"), &ideal_candidate("m-high"));
    assert!(approx_eq(high.requirement_pct, 100.0));
    assert!(high.bonus_points > 0.0);
    assert_eq!(high.final_score, 100.0);
}

#[test]
fn scoring_is_idempotent() {
    let engine = engine();
    let client = family_client("c-1");
    let candidate = ideal_candidate("m-1");
    assert_eq!(
        engine.score_pair(&client, &candidate),
        engine.score_pair(&client, &candidate)
    );
}

#[test]
fn bonus_total_is_capped() {
    let mut candidate = plain_candidate("m-1");
    candidate.language_count = 3;
    candidate.years_of_experience = 6;
    candidate.education = Some("college".to_string());
    candidate.personality = TokenSet::parse("polite+energetic+cooperative");
    candidate.travel = TravelFlexibility::TravelAndRelocate;

    let weights = WeightConfig::standard();
    let summary = evaluate_bonuses(&blank_client("c-1"), &candidate, &weights.bonuses);

    assert!(approx_eq(summary.raw_total, 18.0));
    assert_eq!(summary.total, 10.0);
    assert!(summary
        .awards
        .iter()
        .any(|award| award.kind == BonusTrait::Experience && award.points == 4.0));
    assert_eq!(
        summary
            .awards
            .iter()
            .filter(|award| award.kind == BonusTrait::Personality)
            .count(),
        3
    );

    let result = engine().score_pair(&blank_client("c-1"), &candidate);
    assert_eq!(result.bonus_points, 10.0);
}

#[test]
fn bonus_policy_controls_requirement_overlap() {
    let mut client = blank_client("c-1");
    client.living = TokenSet::parse("private_room");
    let mut candidate = plain_candidate("m-1");
    candidate.travel = TravelFlexibility::TravelAndRelocate;

    let aware = WeightConfig::standard();
    let summary = evaluate_bonuses(&client, &candidate, &aware.bonuses);
    assert!(summary.awards.iter().all(|award| award.kind != BonusTrait::Travel));

    let blind = WeightConfig::standard().with_bonus_policy(BonusPolicy::RequirementBlind);
    let summary = evaluate_bonuses(&client, &candidate, &blind.bonuses);
    assert!(summary.awards.iter().any(|award| award.kind == BonusTrait::Travel));
}

#[test]
fn penalties_apply_regardless_of_client_preferences() {
    let smoker = smoker_candidate("m-1");
    let result = engine().score_pair(&blank_client("c-1"), &smoker);
    assert_eq!(result.penalties.len(), 1);
    assert_eq!(result.penalties[0].kind, PenaltyKind::Smoking);
    assert!(approx_eq(result.penalty_points, 30.0));

    let points = WeightConfig::standard().with_penalty_unit(PenaltyUnit::Points);
    let result = score_pair(&blank_client("c-1"), &smoker, &points).expect("valid weights");
    assert!(approx_eq(result.penalty_points, 0.3));
}

#[test]
fn unstated_smoking_penalty_is_configurable() {
    let unstated = CandidateProfile::new("m-1");
    let result = engine().score_pair(&blank_client("c-1"), &unstated);
    assert_eq!(result.penalties.len(), 1);

    let mut weights = WeightConfig::standard();
    weights.penalties.penalize_unstated_smoking = false;
    let result = score_pair(&blank_client("c-1"), &unstated, &weights).expect("valid weights");
    assert!(result.penalties.is_empty());
}

#[test]
fn refusal_override_policy_end_to_end() {
    let mut client = blank_client("c-1");
    client.household = HouseholdNeed::Baby;
    let mut candidate = plain_candidate("m-1");
    candidate.household_refusal = HouseholdRefusal::RefusesBaby;
    candidate.kids_experience = KidsExperience::Both;

    let strict = score_pair(&client, &candidate, &neutral_weights()).expect("valid weights");
    assert_eq!(strict.contribution(Dimension::Household), Some(0.0));
    assert_eq!(strict.suitability, Suitability::NotSuitable);

    let lenient = neutral_weights().with_refusal_policy(RefusalPolicy::ExperienceOverride);
    let overridden = score_pair(&client, &candidate, &lenient).expect("valid weights");
    let contribution = overridden
        .contribution(Dimension::Household)
        .expect("household stated");
    assert!(approx_eq(contribution, 0.7 * 1.2));
    assert!(approx_eq(overridden.requirement_pct, 120.0));
    assert_eq!(overridden.final_score, 100.0);
    assert_eq!(overridden.suitability, Suitability::Suitable);
}

#[test]
fn only_hard_requirements_decide_suitability() {
    let client = family_client("c-1");

    let mut soft_miss = ideal_candidate("m-soft");
    soft_miss.refuses_fixed_sunday = true;
    soft_miss.cuisines = TokenSet::default();
    let result = engine().score_pair(&client, &soft_miss);
    assert_eq!(result.suitability, Suitability::Suitable);

    let mut hard_miss = ideal_candidate("m-hard");
    hard_miss.nationality = Some("ethiopian".to_string());
    let result = engine().score_pair(&client, &hard_miss);
    assert_eq!(result.suitability, Suitability::NotSuitable);
    assert_eq!(result.suitability.label(), "Not Suitable");
}

#[test]
fn explanation_groups_reasons_in_evaluator_order() {
    let mut candidate = ideal_candidate("m-1");
    candidate.refuses_fixed_sunday = true;
    candidate.smoking = SmokingStatus::Smoker;

    let result = score_pair(&family_client("c-1"), &candidate, &WeightConfig::standard())
        .expect("valid weights");
    let explanation = result.explain();

    assert_eq!(explanation.matched.len(), 6);
    assert!(explanation.matched[0].starts_with("Client wants baby"));
    assert_eq!(explanation.matched[5], "Cuisine preference matched.");
    assert_eq!(
        explanation.joined(ExplanationBucket::Penalties),
        "Day-off policy mismatch: maid refuses a fixed Sunday off.; Maid is a smoker (penalty)."
    );

    let rendered = explanation.render();
    assert!(rendered.contains("Bonus traits: None"));
    assert!(rendered.contains("Not specified by client: None"));
    assert!(approx_eq(result.final_score, 3.2 / 3.8 * 100.0 - 30.0));
}

#[test]
fn bonus_reasons_join_with_commas() {
    let mut candidate = plain_candidate("m-1");
    candidate.language_count = 2;

    let result = engine().score_pair(&blank_client("c-1"), &candidate);
    let explanation = result.explain();

    assert_eq!(
        explanation.joined(ExplanationBucket::Bonuses),
        "Speaks 2 languages, Non-smoker"
    );
    assert_eq!(explanation.not_specified.len(), 7);
}

#[test]
fn invalid_weights_fail_before_scoring() {
    let mut weights = WeightConfig::standard();
    weights.bonuses.cap = f64::INFINITY;
    assert!(matches!(
        MatchEngine::new(weights.clone()),
        Err(WeightConfigError::NonFinite { field: "bonuses.cap" })
    ));

    weights.bonuses.cap = 10.0;
    weights.override_multiplier = -1.0;
    assert!(matches!(
        score_pair(&blank_client("c-1"), &plain_candidate("m-1"), &weights),
        Err(WeightConfigError::Negative { .. })
    ));
}

#[test]
fn bad_attitude_cancels_the_no_attitude_bonus() {
    let mut candidate = plain_candidate("m-1");
    candidate.personality = TokenSet::parse("bad_attitude+no_attitude+polite");

    let result = engine().score_pair(&blank_client("c-1"), &candidate);

    assert!(result
        .penalties
        .iter()
        .any(|penalty| penalty.kind == PenaltyKind::Attitude));
    let labels: Vec<&str> = result
        .bonuses
        .iter()
        .map(|award| award.reason.as_str())
        .collect();
    assert!(labels.contains(&"Polite"));
    assert!(!labels.contains(&"Does not have attitude"));
}

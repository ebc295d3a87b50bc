use std::io::Cursor;

use maid_match::matching::export::write_rows;
use maid_match::matching::ingest::{parse_candidates, parse_clients};
use maid_match::matching::{
    rank_candidates, MatchEngine, MatchRow, RefusalPolicy, ScoreSummary, Suitability,
    WeightConfig,
};

const CLIENTS: &str = "\
client_name,clientmts_household_type,clientmts_special_cases,clientmts_pet_type,clientmts_dayoff_policy,clientmts_living_arrangement,clientmts_nationality_preference,clientmts_cuisine_preference
Hessa,baby,elderly,cat,fixed_sunday,private_room,filipina+ethiopian,lebanese+khaleeji
Omar,,,,,,any,
";

const CANDIDATES: &str = "\
maid_id,maidmts_household_type,maidpref_kids_experience,maidpref_caregiving_profile,maidmts_pet_type,maidpref_pet_handling,maidmts_dayoff_policy,maidmts_living_arrangement,maid_nationality,cooking_group,num_languages,years_of_experience,maidpref_smoking
M-1,,both,elderly,,both,,,filipina,lebanese+khaleeji,2,6,non_smoker
M-2,refuses_baby,both,elderly,,both,,,ethiopian,lebanese,1,3,non_smoker
M-3,,both,,refuses_cat,cats,refuses_fixed_sunday,requires_no_private_room,indian,khaleeji,1,1,smoker
M-4,,lessthan2,elderly,,cats,,,ethiopian,lebanese+khaleeji,1,0,non_smoker
";

#[test]
fn shortlist_prefers_fully_compatible_candidates() {
    let clients = parse_clients(Cursor::new(CLIENTS)).expect("clients parse");
    let candidates = parse_candidates(Cursor::new(CANDIDATES)).expect("candidates parse");
    let weights = WeightConfig::standard();

    let shortlist = rank_candidates(&clients[0], &candidates, &weights, 2).expect("valid weights");

    assert_eq!(shortlist.pool_size, 4);
    assert_eq!(shortlist.matches.len(), 2);
    assert_eq!(shortlist.matches[0].candidate_id.0, "M-1");
    assert_eq!(shortlist.matches[0].result.final_score, 100.0);
    assert_eq!(shortlist.matches[1].candidate_id.0, "M-4");
    assert!(shortlist
        .matches
        .windows(2)
        .all(|pair| pair[0].result.final_score >= pair[1].result.final_score));
}

#[test]
fn experience_override_lifts_refusing_candidate() {
    let clients = parse_clients(Cursor::new(CLIENTS)).expect("clients parse");
    let candidates = parse_candidates(Cursor::new(CANDIDATES)).expect("candidates parse");

    let strict = MatchEngine::new(WeightConfig::standard()).expect("valid weights");
    let lenient = MatchEngine::new(
        WeightConfig::standard().with_refusal_policy(RefusalPolicy::ExperienceOverride),
    )
    .expect("valid weights");

    let refusing = &candidates[1];
    let strict_result = strict.score_pair(&clients[0], refusing);
    let lenient_result = lenient.score_pair(&clients[0], refusing);

    assert_eq!(strict_result.suitability, Suitability::NotSuitable);
    assert_eq!(lenient_result.suitability, Suitability::Suitable);
    assert!(lenient_result.final_score > strict_result.final_score);
}

#[test]
fn pool_ranking_feeds_export_and_summary() {
    let clients = parse_clients(Cursor::new(CLIENTS)).expect("clients parse");
    let candidates = parse_candidates(Cursor::new(CANDIDATES)).expect("candidates parse");
    let engine = MatchEngine::default();

    let sets = engine.rank_pool(&clients, &candidates, 3);
    let rows = MatchRow::from_ranked(&sets);
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].client_id, "Hessa");
    assert_eq!(rows[3].client_id, "Omar");
    assert_eq!(rows[3].rank, Some(1));

    let mut buffer = Vec::new();
    write_rows(&mut buffer, &rows).expect("export succeeds");
    assert_eq!(String::from_utf8(buffer).expect("utf8").lines().count(), 7);

    let summary = ScoreSummary::from_results(
        sets.iter()
            .flat_map(|set| set.matches.iter().map(|ranked| &ranked.result)),
    );
    assert_eq!(summary.count, 6);
    assert_eq!(summary.max, 100.0);
    assert_eq!(summary.buckets.iter().sum::<usize>(), 6);
    assert!(summary.suitable >= 4);
}

use maid_match::matching::{MatchResult, RankedMatchSet};

pub(crate) fn render_explanation(result: &MatchResult) -> String {
    format!(
        "Client {} - Maid {} (Score: {:.1}%, {})\n{}",
        result.client_id.0,
        result.candidate_id.0,
        result.final_score,
        result.suitability.label(),
        result.explain().render()
    )
}

pub(crate) fn render_shortlists(sets: &[RankedMatchSet]) -> String {
    let mut lines = Vec::new();
    for set in sets {
        lines.push(format!(
            "Client {} ({} candidates scored)",
            set.client_id.0, set.pool_size
        ));
        if set.is_empty() {
            lines.push("  no candidates".to_string());
            continue;
        }
        lines.extend(set.matches.iter().map(|ranked| {
            format!(
                "  #{} {:<12} {:>6.1}  {}",
                ranked.rank,
                ranked.candidate_id.0,
                ranked.result.final_score,
                ranked.result.suitability.label()
            )
        }));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use maid_match::matching::{CandidateProfile, ClientProfile, MatchEngine};

    #[test]
    fn shortlist_lists_ranked_candidates() {
        let engine = MatchEngine::default();
        let clients = vec![ClientProfile::new("c-1")];
        let candidates = vec![CandidateProfile::new("m-1"), CandidateProfile::new("m-2")];
        let sets = engine.rank_pool(&clients, &candidates, 1);

        let rendered = render_shortlists(&sets);
        assert!(rendered.starts_with("Client c-1 (2 candidates scored)"));
        assert!(rendered.contains("#1 m-1"));
        assert!(!rendered.contains("m-2"));
    }

    #[test]
    fn explanation_includes_every_bucket() {
        let engine = MatchEngine::default();
        let result = engine.score_pair(&ClientProfile::new("c-1"), &CandidateProfile::new("m-1"));
        let rendered = render_explanation(&result);
        assert!(rendered.contains("Requirements matched: None"));
        assert!(rendered.contains("Not specified by client:"));
        assert!(rendered.contains("Penalties / mismatches: Maid did not state smoking status"));
    }
}

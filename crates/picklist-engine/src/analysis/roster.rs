// Roster analysis: ranks every unselected candidate and summarizes the
// selection built so far.

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

use crate::analysis::evaluate::{evaluate_with_config, Suggestion};
use crate::analysis::thresholds::{MIN_CORE_PICKS, TARGET_ROSTER_AVERAGE};
use crate::analysis::traits::{strength_set, weakness_set, Trait};
use crate::config::EngineConfig;
use crate::scouting::selection::{scouted_stats, Candidate, SelectionEntry};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Holistic assessment of the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSummary {
    /// Sum of average total scores over scouted members.
    pub total_potential_score: f64,
    /// Mean average total score over scouted members; 0.0 when none are scouted.
    pub balanced_score: f64,
    /// Dimensions at least one scouted member is strong in.
    pub coverage: BTreeSet<Trait>,
    /// Dimensions at least one scouted member is weak in.
    pub gaps: BTreeSet<Trait>,
    pub recommendations: Vec<String>,
}

/// Ranked suggestions plus the selection summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterAnalysis {
    pub suggestions: Vec<Suggestion>,
    pub summary: RosterSummary,
}

impl RosterAnalysis {
    pub fn into_parts(self) -> (Vec<Suggestion>, RosterSummary) {
        (self.suggestions, self.summary)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Stateless ranking engine. Holds only its policy; every call works on the
/// snapshot it is given, so one engine can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct PickListEngine {
    config: EngineConfig,
}

impl PickListEngine {
    /// Create an engine with the given policy.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate a single candidate against the selection.
    pub fn evaluate_candidate(
        &self,
        candidate: &Candidate,
        selection: &[SelectionEntry],
    ) -> Suggestion {
        evaluate_with_config(candidate, selection, &self.config)
    }

    /// Rank the pool and summarize the selection.
    pub fn analyze_roster(&self, pool: &[Candidate], selection: &[SelectionEntry]) -> RosterAnalysis {
        let suggestions = self.rank_candidates(pool, selection);
        let summary = summarize(selection);
        RosterAnalysis {
            suggestions,
            summary,
        }
    }

    /// Evaluate every unselected candidate and keep the top N.
    ///
    /// 1. Skip candidates whose id is already selected, and repeat ids
    ///    within the pool (first occurrence wins).
    /// 2. Evaluate the rest.
    /// 3. Stable-sort by `confidence * strategic_value`, descending, so
    ///    ties keep pool order.
    /// 4. Truncate to `ranking.top_n`.
    pub fn rank_candidates(
        &self,
        pool: &[Candidate],
        selection: &[SelectionEntry],
    ) -> Vec<Suggestion> {
        let mut seen: HashSet<&str> = selection.iter().map(|e| e.id.as_str()).collect();

        let mut suggestions: Vec<Suggestion> = pool
            .iter()
            .filter(|c| seen.insert(c.id.as_str()))
            .map(|c| evaluate_with_config(c, selection, &self.config))
            .collect();

        let evaluated = suggestions.len();

        suggestions.sort_by(|a, b| {
            b.ranking_score()
                .partial_cmp(&a.ranking_score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        suggestions.truncate(self.config.ranking.top_n);

        debug!(
            "ranked {} of {} pool candidates against {} selected, returning {}",
            evaluated,
            pool.len(),
            selection.len(),
            suggestions.len()
        );

        suggestions
    }
}

// ---------------------------------------------------------------------------
// Free-function entry points
// ---------------------------------------------------------------------------

/// Rank the pool and summarize the selection with default policy.
pub fn analyze_roster(pool: &[Candidate], selection: &[SelectionEntry]) -> RosterAnalysis {
    PickListEngine::default().analyze_roster(pool, selection)
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Aggregate the selection into a summary with coverage, gaps and
/// recommendations. Members without stats count toward the roster size
/// only.
pub fn summarize(selection: &[SelectionEntry]) -> RosterSummary {
    let totals: Vec<f64> = scouted_stats(selection)
        .map(|s| s.avg_total_score)
        .collect();

    let total_potential_score: f64 = totals.iter().sum();
    let balanced_score = if totals.is_empty() {
        0.0
    } else {
        total_potential_score / totals.len() as f64
    };

    let coverage = strength_set(scouted_stats(selection));
    let gaps = weakness_set(scouted_stats(selection));

    let recommendations = build_recommendations(selection.len(), &coverage, balanced_score);

    RosterSummary {
        total_potential_score,
        balanced_score,
        coverage,
        gaps,
        recommendations,
    }
}

/// Independent checklist; any subset of lines may fire, always in this order.
fn build_recommendations(
    selection_size: usize,
    coverage: &BTreeSet<Trait>,
    balanced_score: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if selection_size < MIN_CORE_PICKS {
        recommendations.push("Consider adding a high-scoring primary team".to_string());
    }
    if !coverage.contains(&Trait::Autonomous) {
        recommendations.push("Add a team with strong autonomous capability".to_string());
    }
    if !coverage.contains(&Trait::Endgame) {
        recommendations.push("Prioritize a team with reliable endgame execution".to_string());
    }
    if !coverage.contains(&Trait::Defense) {
        recommendations.push("Consider a defensive specialist to disrupt opponents".to_string());
    }
    if balanced_score < TARGET_ROSTER_AVERAGE {
        recommendations
            .push("Focus on higher-scoring teams to raise the roster average".to_string());
    }

    recommendations
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RankingPolicy;
    use crate::scouting::record::StatsRecord;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn stats(total: f64) -> StatsRecord {
        StatsRecord {
            avg_total_score: total,
            avg_autonomous_points: 12.0,
            avg_teleop_points: 35.0,
            avg_endgame_points: 17.0,
            avg_defense_rating: 6.0,
            total_matches: 10,
            consistency_score: 70.0,
        }
    }

    fn scouted(id: &str, total: f64) -> Candidate {
        Candidate::new(id, format!("Team {id}")).with_stats(stats(total))
    }

    fn picked(candidate: Candidate, rank: u32) -> SelectionEntry {
        SelectionEntry::from_candidate(candidate, rank)
    }

    #[test]
    fn excludes_selected_ids() {
        let pool = vec![scouted("1", 70.0), scouted("2", 60.0), scouted("3", 50.0)];
        let selection = vec![picked(scouted("2", 60.0), 1)];

        let ranked = PickListEngine::default().rank_candidates(&pool, &selection);
        let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn duplicate_pool_ids_are_evaluated_once() {
        let pool = vec![scouted("1", 70.0), scouted("1", 90.0), scouted("2", 60.0)];

        let ranked = PickListEngine::default().rank_candidates(&pool, &[]);
        assert_eq!(ranked.len(), 2);
        let first = ranked.iter().find(|s| s.id == "1").unwrap();
        assert!(first.reasoning.iter().any(|r| r.contains("70.0")));
    }

    #[test]
    fn sorted_by_ranking_score_descending() {
        let pool = vec![scouted("low", 40.0), scouted("high", 95.0), scouted("mid", 65.0)];

        let ranked = PickListEngine::default().rank_candidates(&pool, &[]);
        let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn ties_keep_pool_order() {
        let pool = vec![
            scouted("a", 65.0),
            Candidate::new("u1", "Unscouted 1"),
            scouted("b", 65.0),
            Candidate::new("u2", "Unscouted 2"),
        ];

        let ranked = PickListEngine::default().rank_candidates(&pool, &[]);
        let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "u1", "u2"]);
    }

    #[test]
    fn truncates_to_top_n() {
        let pool: Vec<Candidate> = (0..25)
            .map(|i| scouted(&format!("{i}"), 40.0 + i as f64))
            .collect();

        let ranked = PickListEngine::default().rank_candidates(&pool, &[]);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].id, "24");

        let engine = PickListEngine::new(EngineConfig {
            ranking: RankingPolicy { top_n: 3 },
            ..EngineConfig::default()
        });
        assert_eq!(engine.rank_candidates(&pool, &[]).len(), 3);
    }

    #[test]
    fn summary_totals_and_average() {
        let selection = vec![
            picked(scouted("1", 80.0), 1),
            picked(Candidate::new("2", "Unscouted"), 2),
            picked(scouted("3", 60.0), 3),
        ];

        let summary = summarize(&selection);
        assert!(approx_eq(summary.total_potential_score, 140.0, 1e-9));
        assert!(approx_eq(summary.balanced_score, 70.0, 1e-9));
    }

    #[test]
    fn summary_of_unscouted_selection_has_zero_average() {
        let selection = vec![
            picked(Candidate::new("1", "A"), 1),
            picked(Candidate::new("2", "B"), 2),
            picked(Candidate::new("3", "C"), 3),
        ];

        let summary = summarize(&selection);
        assert_eq!(summary.total_potential_score, 0.0);
        assert_eq!(summary.balanced_score, 0.0);
        assert!(summary.coverage.is_empty());
        assert!(summary.gaps.is_empty());
    }

    #[test]
    fn empty_selection_fires_every_recommendation() {
        let summary = summarize(&[]);
        assert_eq!(
            summary.recommendations,
            vec![
                "Consider adding a high-scoring primary team".to_string(),
                "Add a team with strong autonomous capability".to_string(),
                "Prioritize a team with reliable endgame execution".to_string(),
                "Consider a defensive specialist to disrupt opponents".to_string(),
                "Focus on higher-scoring teams to raise the roster average".to_string(),
            ]
        );
    }

    #[test]
    fn well_rounded_selection_needs_nothing() {
        let all_round = |id: &str| {
            Candidate::new(id, id).with_stats(StatsRecord {
                avg_total_score: 85.0,
                avg_autonomous_points: 18.0,
                avg_teleop_points: 45.0,
                avg_endgame_points: 24.0,
                avg_defense_rating: 8.0,
                total_matches: 12,
                consistency_score: 85.0,
            })
        };
        let selection = vec![
            picked(all_round("1"), 1),
            picked(all_round("2"), 2),
            picked(all_round("3"), 3),
        ];

        let summary = summarize(&selection);
        assert!(summary.recommendations.is_empty());
        assert_eq!(summary.coverage.len(), Trait::ALL.len());
        assert!(summary.gaps.is_empty());
    }

    #[test]
    fn coverage_and_gaps_are_unions() {
        let selection = vec![
            picked(
                Candidate::new("1", "Auto").with_stats(StatsRecord {
                    avg_autonomous_points: 19.0,
                    avg_defense_rating: 3.0,
                    ..stats(65.0)
                }),
                1,
            ),
            picked(
                Candidate::new("2", "Endgame").with_stats(StatsRecord {
                    avg_endgame_points: 23.0,
                    avg_defense_rating: 4.0,
                    ..stats(65.0)
                }),
                2,
            ),
            picked(scouted("3", 62.0), 3),
        ];

        let summary = summarize(&selection);
        assert_eq!(
            summary.coverage.iter().copied().collect::<Vec<_>>(),
            vec![Trait::Autonomous, Trait::Endgame]
        );
        assert_eq!(
            summary.gaps.iter().copied().collect::<Vec<_>>(),
            vec![Trait::Defense]
        );
        assert_eq!(
            summary.recommendations,
            vec!["Consider a defensive specialist to disrupt opponents".to_string()]
        );
    }

    #[test]
    fn analysis_splits_into_parts() {
        let pool = vec![scouted("1", 70.0), scouted("2", 60.0)];
        let selection = vec![picked(scouted("2", 60.0), 1)];

        let (suggestions, summary) = analyze_roster(&pool, &selection).into_parts();
        assert_eq!(suggestions.len(), 1);
        assert!(approx_eq(summary.balanced_score, 60.0, 1e-9));
    }
}

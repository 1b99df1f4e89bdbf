// Candidate evaluation: profile, category, traits and compatibility folded
// into one explained suggestion.

use serde::Serialize;
use tracing::warn;

use crate::analysis::category::{classify, Category};
use crate::analysis::clamp01;
use crate::analysis::compatibility::compatibility;
use crate::analysis::profile::{compute_profile, PerformanceProfile};
use crate::analysis::thresholds::{
    AUTONOMOUS_SPECIALIST_MIN, CONSISTENCY_NOTE_MIN, DEFENSE_SPECIALIST_MIN, ELITE_SCORING_MIN,
    ENDGAME_SPECIALIST_MIN, EXTENSIVE_HISTORY_MATCHES, HIGH_CONSISTENCY_MIN,
    MODERATE_HISTORY_MATCHES, SCORING_NOTE_MIN,
};
use crate::analysis::traits::{strength_phrases, strengths, weakness_phrases, weaknesses};
use crate::config::EngineConfig;
use crate::scouting::record::StatsRecord;
use crate::scouting::selection::{Candidate, SelectionEntry};

// ---------------------------------------------------------------------------
// Unscouted fallback
// ---------------------------------------------------------------------------

pub const UNSCOUTED_CONFIDENCE: f64 = 0.3;
pub const UNSCOUTED_STRATEGIC_VALUE: f64 = 0.3;
pub const UNSCOUTED_COMPATIBILITY: f64 = 0.5;
pub const UNSCOUTED_REASONING: &str = "Limited scouting data available";
pub const UNSCOUTED_WEAKNESS: &str = "No performance data available";

// ---------------------------------------------------------------------------
// Suggestion
// ---------------------------------------------------------------------------

/// One ranked, explained recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub display_name: String,
    pub confidence: f64,
    pub strategic_value: f64,
    pub category: Category,
    pub compatibility: f64,
    pub reasoning: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl Suggestion {
    /// Sort key used when ranking suggestions.
    pub fn ranking_score(&self) -> f64 {
        self.confidence * self.strategic_value
    }

    /// Fixed low-confidence suggestion for a team with no stats, so it can
    /// still be ranked.
    fn unscouted(candidate: &Candidate) -> Self {
        Suggestion {
            id: candidate.id.clone(),
            display_name: candidate.display_name.clone(),
            confidence: UNSCOUTED_CONFIDENCE,
            strategic_value: UNSCOUTED_STRATEGIC_VALUE,
            category: Category::Balanced,
            compatibility: UNSCOUTED_COMPATIBILITY,
            reasoning: vec![UNSCOUTED_REASONING.to_string()],
            strengths: Vec::new(),
            weaknesses: vec![UNSCOUTED_WEAKNESS.to_string()],
        }
    }
}

// ---------------------------------------------------------------------------
// Core computation
// ---------------------------------------------------------------------------

/// Evaluate a candidate against the current selection with default policy.
pub fn evaluate_candidate(candidate: &Candidate, selection: &[SelectionEntry]) -> Suggestion {
    evaluate_with_config(candidate, selection, &EngineConfig::default())
}

/// Evaluate a candidate against the current selection.
///
/// Stages run in a fixed order (profile, category, traits, compatibility)
/// so the reasoning text is reproducible. Records that fail
/// [`StatsRecord::validate`] are logged and scored anyway.
pub fn evaluate_with_config(
    candidate: &Candidate,
    selection: &[SelectionEntry],
    config: &EngineConfig,
) -> Suggestion {
    let Some(stats) = candidate.stats.as_ref() else {
        return Suggestion::unscouted(candidate);
    };

    if let Err(e) = stats.validate() {
        warn!("scoring team '{}' with out-of-contract stats: {}", candidate.id, e);
    }

    let profile = compute_profile(stats, &config.profile);
    let category = classify(stats);
    let strong = strengths(stats);
    let weak = weaknesses(stats);
    let compat = compatibility(selection, stats, &config.compatibility);

    let confidence = compute_confidence(&profile, compat, config);
    let strategic_value = compute_strategic_value(&profile, compat, config);

    Suggestion {
        id: candidate.id.clone(),
        display_name: candidate.display_name.clone(),
        confidence,
        strategic_value,
        category,
        compatibility: compat,
        reasoning: build_reasoning(stats, category),
        strengths: strength_phrases(&strong),
        weaknesses: weakness_phrases(&weak),
    }
}

fn compute_confidence(profile: &PerformanceProfile, compat: f64, config: &EngineConfig) -> f64 {
    let w = &config.confidence;
    clamp01(
        w.reliability * profile.reliability_score
            + w.sample_size * profile.consistency_factor
            + w.compatibility * compat,
    )
}

fn compute_strategic_value(
    profile: &PerformanceProfile,
    compat: f64,
    config: &EngineConfig,
) -> f64 {
    let w = &config.strategic_value;
    clamp01(
        w.overall * (profile.overall_score / 100.0)
            + w.specialization * profile.specialization_score
            + w.compatibility * compat,
    )
}

// ---------------------------------------------------------------------------
// Reasoning
// ---------------------------------------------------------------------------

/// Build the explanation lines, always in this order: match history,
/// consistency, scoring output, per-phase specialties, category closer.
fn build_reasoning(stats: &StatsRecord, category: Category) -> Vec<String> {
    let mut reasoning = Vec::new();

    let matches = stats.total_matches;
    let history = if matches >= EXTENSIVE_HISTORY_MATCHES {
        "Extensive"
    } else if matches >= MODERATE_HISTORY_MATCHES {
        "Moderate"
    } else {
        "Limited"
    };
    reasoning.push(format!("{history} match history ({matches} matches)"));

    if stats.consistency_score > CONSISTENCY_NOTE_MIN {
        let line = if stats.consistency_score > HIGH_CONSISTENCY_MIN {
            "Highly consistent from match to match"
        } else {
            "Generally consistent performance"
        };
        reasoning.push(line.to_string());
    }

    if stats.avg_total_score > SCORING_NOTE_MIN {
        let tier = if stats.avg_total_score > ELITE_SCORING_MIN {
            "Elite"
        } else {
            "Strong"
        };
        reasoning.push(format!(
            "{tier} scoring output ({:.1} points per match)",
            stats.avg_total_score
        ));
    }

    if stats.avg_autonomous_points > AUTONOMOUS_SPECIALIST_MIN {
        reasoning.push(format!(
            "Strong autonomous routine ({:.1} points)",
            stats.avg_autonomous_points
        ));
    }
    if stats.avg_endgame_points > ENDGAME_SPECIALIST_MIN {
        reasoning.push(format!(
            "Dependable endgame ({:.1} points)",
            stats.avg_endgame_points
        ));
    }
    if stats.avg_defense_rating > DEFENSE_SPECIALIST_MIN {
        reasoning.push(format!(
            "Effective defender ({:.1}/10 rating)",
            stats.avg_defense_rating
        ));
    }

    reasoning.push(category_closer(category).to_string());

    reasoning
}

fn category_closer(category: Category) -> &'static str {
    match category {
        Category::Primary => "Top-tier all-around pick who can anchor the alliance",
        Category::Secondary => "Solid secondary scorer to support the primary pick",
        Category::Specialist => "Specialist who excels in a specific match phase",
        Category::Defensive => "Defensive anchor who can disrupt opposing scorers",
        Category::Balanced => "Balanced contributor without a standout weakness",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

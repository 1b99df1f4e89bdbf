// Strength and weakness extraction.
//
// Traits are tagged by the performance dimension they describe, so the
// compatibility scorer can match a candidate's strength against a
// selection's weakness by tag equality.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::analysis::thresholds::{
    AUTONOMOUS_SPECIALIST_MIN, DEFENSE_SPECIALIST_MIN, ENDGAME_SPECIALIST_MIN,
    STRENGTH_CONSISTENCY_MIN, STRENGTH_OVERALL_MIN, TELEOP_SPECIALIST_MIN,
    WEAKNESS_AUTONOMOUS_MAX, WEAKNESS_CONSISTENCY_MAX, WEAKNESS_DEFENSE_MAX,
    WEAKNESS_ENDGAME_MAX, WEAKNESS_OVERALL_MAX, WEAKNESS_TELEOP_MAX,
};
use crate::scouting::record::StatsRecord;

// ---------------------------------------------------------------------------
// Trait tags
// ---------------------------------------------------------------------------

/// A performance dimension a team is notably strong or weak in.
///
/// Declaration order is the order checks run in, and the iteration order
/// of trait sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trait {
    Overall,
    Autonomous,
    Teleop,
    Endgame,
    Defense,
    Consistency,
}

impl Trait {
    /// All dimensions, in check order.
    pub const ALL: [Trait; 6] = [
        Trait::Overall,
        Trait::Autonomous,
        Trait::Teleop,
        Trait::Endgame,
        Trait::Defense,
        Trait::Consistency,
    ];

    /// Short lowercase name of the dimension.
    pub fn label(&self) -> &'static str {
        match self {
            Trait::Overall => "overall",
            Trait::Autonomous => "autonomous",
            Trait::Teleop => "teleop",
            Trait::Endgame => "endgame",
            Trait::Defense => "defense",
            Trait::Consistency => "consistency",
        }
    }

    /// Display phrase used when this dimension is a strength.
    pub fn strength_phrase(&self) -> &'static str {
        match self {
            Trait::Overall => "High scoring potential",
            Trait::Autonomous => "Strong autonomous performance",
            Trait::Teleop => "Excellent teleop scoring",
            Trait::Endgame => "Reliable endgame execution",
            Trait::Defense => "Strong defensive capabilities",
            Trait::Consistency => "Consistent match-to-match performance",
        }
    }

    /// Display phrase used when this dimension is a weakness.
    pub fn weakness_phrase(&self) -> &'static str {
        match self {
            Trait::Overall => "Low overall scoring",
            Trait::Autonomous => "Weak autonomous period",
            Trait::Teleop => "Limited teleop scoring",
            Trait::Endgame => "Unreliable endgame",
            Trait::Defense => "Limited defensive capabilities",
            Trait::Consistency => "Inconsistent match performance",
        }
    }

    fn value(&self, stats: &StatsRecord) -> f64 {
        match self {
            Trait::Overall => stats.avg_total_score,
            Trait::Autonomous => stats.avg_autonomous_points,
            Trait::Teleop => stats.avg_teleop_points,
            Trait::Endgame => stats.avg_endgame_points,
            Trait::Defense => stats.avg_defense_rating,
            Trait::Consistency => stats.consistency_score,
        }
    }

    /// Bar a value must exceed to count as a strength.
    fn strength_bar(&self) -> f64 {
        match self {
            Trait::Overall => STRENGTH_OVERALL_MIN,
            Trait::Autonomous => AUTONOMOUS_SPECIALIST_MIN,
            Trait::Teleop => TELEOP_SPECIALIST_MIN,
            Trait::Endgame => ENDGAME_SPECIALIST_MIN,
            Trait::Defense => DEFENSE_SPECIALIST_MIN,
            Trait::Consistency => STRENGTH_CONSISTENCY_MIN,
        }
    }

    /// Bar a value must fall below to count as a weakness.
    fn weakness_bar(&self) -> f64 {
        match self {
            Trait::Overall => WEAKNESS_OVERALL_MAX,
            Trait::Autonomous => WEAKNESS_AUTONOMOUS_MAX,
            Trait::Teleop => WEAKNESS_TELEOP_MAX,
            Trait::Endgame => WEAKNESS_ENDGAME_MAX,
            Trait::Defense => WEAKNESS_DEFENSE_MAX,
            Trait::Consistency => WEAKNESS_CONSISTENCY_MAX,
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Dimensions where the team clears its strength bar. Checks are independent.
pub fn strengths(stats: &StatsRecord) -> Vec<Trait> {
    Trait::ALL
        .into_iter()
        .filter(|t| t.value(stats) > t.strength_bar())
        .collect()
}

/// Dimensions where the team falls under its weakness bar. Checks are independent.
pub fn weaknesses(stats: &StatsRecord) -> Vec<Trait> {
    Trait::ALL
        .into_iter()
        .filter(|t| t.value(stats) < t.weakness_bar())
        .collect()
}

/// Union of strengths across several records.
pub fn strength_set<'a>(records: impl IntoIterator<Item = &'a StatsRecord>) -> BTreeSet<Trait> {
    records.into_iter().flat_map(strengths).collect()
}

/// Union of weaknesses across several records.
pub fn weakness_set<'a>(records: impl IntoIterator<Item = &'a StatsRecord>) -> BTreeSet<Trait> {
    records.into_iter().flat_map(weaknesses).collect()
}

/// Render strength tags as display phrases, preserving order.
pub fn strength_phrases(traits: &[Trait]) -> Vec<String> {
    traits.iter().map(|t| t.strength_phrase().to_string()).collect()
}

/// Render weakness tags as display phrases, preserving order.
pub fn weakness_phrases(traits: &[Trait]) -> Vec<String> {
    traits.iter().map(|t| t.weakness_phrase().to_string()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

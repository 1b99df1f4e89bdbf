// Team archetype classification.

use serde::Serialize;
use std::fmt;

use crate::analysis::thresholds::{
    DEFENSIVE_DEFENSE_MIN, DEFENSIVE_TOTAL_MIN, PRIMARY_DEFENSE_MIN, PRIMARY_TOTAL_MIN,
    SECONDARY_TOTAL_MIN, SPECIALIST_AUTONOMOUS_MIN, SPECIALIST_ENDGAME_MIN,
};
use crate::scouting::record::StatsRecord;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Behavioral archetype assigned to every evaluated team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// High-scoring all-rounder that also plays defense.
    Primary,
    /// Solid scorer without the primary team's defensive game.
    Secondary,
    /// Dominant in autonomous or endgame.
    Specialist,
    /// Defense-first team that still scores.
    Defensive,
    /// Nothing stands out.
    Balanced,
}

impl Category {
    /// Return a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Primary => "PRIMARY",
            Category::Secondary => "SECONDARY",
            Category::Specialist => "SPECIALIST",
            Category::Defensive => "DEFENSIVE",
            Category::Balanced => "BALANCED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a team. Rules are checked in order and the first match wins:
///
/// 1. total > 80 and defense > 6 -> Primary
/// 2. autonomous > 20 or endgame > 25 -> Specialist
/// 3. defense > 7 and total > 50 -> Defensive
/// 4. total > 60 -> Secondary
/// 5. otherwise Balanced
pub fn classify(stats: &StatsRecord) -> Category {
    if stats.avg_total_score > PRIMARY_TOTAL_MIN && stats.avg_defense_rating > PRIMARY_DEFENSE_MIN
    {
        return Category::Primary;
    }

    if stats.avg_autonomous_points > SPECIALIST_AUTONOMOUS_MIN
        || stats.avg_endgame_points > SPECIALIST_ENDGAME_MIN
    {
        return Category::Specialist;
    }

    if stats.avg_defense_rating > DEFENSIVE_DEFENSE_MIN
        && stats.avg_total_score > DEFENSIVE_TOTAL_MIN
    {
        return Category::Defensive;
    }

    if stats.avg_total_score > SECONDARY_TOTAL_MIN {
        return Category::Secondary;
    }

    Category::Balanced
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

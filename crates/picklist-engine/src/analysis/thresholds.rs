// Named threshold table shared by the profiler, classifier, trait extractor
// and reasoning text.
//
// All comparisons against these values are strict (`>` / `<`).

// ---------------------------------------------------------------------------
// Specialization bars (profiler multipliers, strengths, reasoning)
// ---------------------------------------------------------------------------

pub const AUTONOMOUS_SPECIALIST_MIN: f64 = 15.0;
pub const TELEOP_SPECIALIST_MIN: f64 = 40.0;
pub const ENDGAME_SPECIALIST_MIN: f64 = 20.0;
pub const DEFENSE_SPECIALIST_MIN: f64 = 7.0;

pub const AUTONOMOUS_MULTIPLIER: f64 = 1.2;
pub const TELEOP_MULTIPLIER: f64 = 1.1;
pub const ENDGAME_MULTIPLIER: f64 = 1.3;
pub const DEFENSE_MULTIPLIER: f64 = 1.2;

/// Cap applied to the average total score before the specialization multiplier.
pub const OVERALL_SCORE_CAP: f64 = 100.0;

// ---------------------------------------------------------------------------
// Classifier rules, in evaluation order
// ---------------------------------------------------------------------------

pub const PRIMARY_TOTAL_MIN: f64 = 80.0;
pub const PRIMARY_DEFENSE_MIN: f64 = 6.0;

pub const SPECIALIST_AUTONOMOUS_MIN: f64 = 20.0;
pub const SPECIALIST_ENDGAME_MIN: f64 = 25.0;

pub const DEFENSIVE_DEFENSE_MIN: f64 = 7.0;
pub const DEFENSIVE_TOTAL_MIN: f64 = 50.0;

pub const SECONDARY_TOTAL_MIN: f64 = 60.0;

// ---------------------------------------------------------------------------
// Trait bars
// ---------------------------------------------------------------------------

pub const STRENGTH_OVERALL_MIN: f64 = 70.0;
pub const STRENGTH_CONSISTENCY_MIN: f64 = 75.0;

pub const WEAKNESS_OVERALL_MAX: f64 = 50.0;
pub const WEAKNESS_AUTONOMOUS_MAX: f64 = 10.0;
pub const WEAKNESS_TELEOP_MAX: f64 = 30.0;
pub const WEAKNESS_ENDGAME_MAX: f64 = 15.0;
pub const WEAKNESS_DEFENSE_MAX: f64 = 5.0;
pub const WEAKNESS_CONSISTENCY_MAX: f64 = 60.0;

// ---------------------------------------------------------------------------
// Reasoning tiers
// ---------------------------------------------------------------------------

pub const EXTENSIVE_HISTORY_MATCHES: u32 = 10;
pub const MODERATE_HISTORY_MATCHES: u32 = 5;

/// Consistency is only mentioned above this score.
pub const CONSISTENCY_NOTE_MIN: f64 = 60.0;
pub const HIGH_CONSISTENCY_MIN: f64 = 80.0;

/// Scoring output is only mentioned above this average.
pub const SCORING_NOTE_MIN: f64 = 60.0;
pub const ELITE_SCORING_MIN: f64 = 80.0;

// ---------------------------------------------------------------------------
// Roster recommendations
// ---------------------------------------------------------------------------

/// Below this many picks the roster still needs a primary anchor.
pub const MIN_CORE_PICKS: usize = 3;

/// Average total score the roster should reach.
pub const TARGET_ROSTER_AVERAGE: f64 = 60.0;

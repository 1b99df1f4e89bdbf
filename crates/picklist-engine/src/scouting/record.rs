// Aggregated per-team performance statistics and caller-side validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of the defense rating scale.
pub const MAX_DEFENSE_RATING: f64 = 10.0;

/// Upper bound of the consistency metric scale.
pub const MAX_CONSISTENCY_SCORE: f64 = 100.0;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// A statistics record that violates the input contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("stat `{field}` is not a finite number")]
    NonFinite { field: &'static str },

    #[error("stat `{field}` must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("stat `{field}` must be at most {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        max: f64,
    },
}

// ---------------------------------------------------------------------------
// Stats record
// ---------------------------------------------------------------------------

/// Averages over a team's observed matches, computed by the host.
///
/// Records are immutable snapshots; every derived score is recomputed from
/// them on each evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub avg_total_score: f64,
    pub avg_autonomous_points: f64,
    pub avg_teleop_points: f64,
    pub avg_endgame_points: f64,
    /// Defense rating on a 0-10 scale.
    pub avg_defense_rating: f64,
    pub total_matches: u32,
    /// 0-100 metric derived from the coefficient of variation of match scores.
    pub consistency_score: f64,
}

impl StatsRecord {
    /// Check the record against the input contract.
    ///
    /// The engine itself never calls this to reject input; scoring is total
    /// over any record. Hosts call it before handing data to the engine.
    pub fn validate(&self) -> Result<(), StatsError> {
        let fields: [(&'static str, f64); 6] = [
            ("avg_total_score", self.avg_total_score),
            ("avg_autonomous_points", self.avg_autonomous_points),
            ("avg_teleop_points", self.avg_teleop_points),
            ("avg_endgame_points", self.avg_endgame_points),
            ("avg_defense_rating", self.avg_defense_rating),
            ("consistency_score", self.consistency_score),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(StatsError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(StatsError::Negative { field, value });
            }
        }

        if self.avg_defense_rating > MAX_DEFENSE_RATING {
            return Err(StatsError::OutOfRange {
                field: "avg_defense_rating",
                value: self.avg_defense_rating,
                max: MAX_DEFENSE_RATING,
            });
        }

        if self.consistency_score > MAX_CONSISTENCY_SCORE {
            return Err(StatsError::OutOfRange {
                field: "consistency_score",
                value: self.consistency_score,
                max: MAX_CONSISTENCY_SCORE,
            });
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

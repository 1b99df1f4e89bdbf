// Performance profile: four normalized sub-scores derived from a stats record.

use crate::analysis::thresholds::{
    AUTONOMOUS_MULTIPLIER, AUTONOMOUS_SPECIALIST_MIN, DEFENSE_MULTIPLIER, DEFENSE_SPECIALIST_MIN,
    ENDGAME_MULTIPLIER, ENDGAME_SPECIALIST_MIN, OVERALL_SCORE_CAP, TELEOP_MULTIPLIER,
    TELEOP_SPECIALIST_MIN,
};
use crate::config::ProfilePolicy;
use crate::scouting::record::StatsRecord;

/// Derived sub-scores for a single team.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceProfile {
    /// Capped average total score scaled by the specialization multiplier.
    pub overall_score: f64,
    /// Sample-size trust factor, ramping linearly to 1.0 at saturation.
    pub consistency_factor: f64,
    /// Mean of the four per-phase multipliers (1.0 to 1.2).
    pub specialization_score: f64,
    /// Blend of the sample-size factor and the external consistency metric.
    pub reliability_score: f64,
}

/// Compute the performance profile for a stats record.
///
/// Each phase that clears its specialist bar contributes its multiplier,
/// otherwise 1.0. The multipliers are averaged rather than stacked so the
/// overall score stays within 1.2x of the capped total.
pub fn compute_profile(stats: &StatsRecord, policy: &ProfilePolicy) -> PerformanceProfile {
    let multipliers = [
        bar_multiplier(stats.avg_autonomous_points, AUTONOMOUS_SPECIALIST_MIN, AUTONOMOUS_MULTIPLIER),
        bar_multiplier(stats.avg_teleop_points, TELEOP_SPECIALIST_MIN, TELEOP_MULTIPLIER),
        bar_multiplier(stats.avg_endgame_points, ENDGAME_SPECIALIST_MIN, ENDGAME_MULTIPLIER),
        bar_multiplier(stats.avg_defense_rating, DEFENSE_SPECIALIST_MIN, DEFENSE_MULTIPLIER),
    ];
    let specialization_score = multipliers.iter().sum::<f64>() / multipliers.len() as f64;

    let overall_score = stats.avg_total_score.min(OVERALL_SCORE_CAP) * specialization_score;

    let consistency_factor =
        (stats.total_matches as f64 / policy.match_saturation as f64).min(1.0);

    let reliability_score = policy.sample_weight * consistency_factor
        + policy.volatility_weight * (stats.consistency_score / 100.0);

    PerformanceProfile {
        overall_score,
        consistency_factor,
        specialization_score,
        reliability_score,
    }
}

fn bar_multiplier(value: f64, bar: f64, multiplier: f64) -> f64 {
    if value > bar {
        multiplier
    } else {
        1.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn baseline() -> StatsRecord {
        StatsRecord {
            avg_total_score: 50.0,
            avg_autonomous_points: 10.0,
            avg_teleop_points: 30.0,
            avg_endgame_points: 15.0,
            avg_defense_rating: 5.0,
            total_matches: 5,
            consistency_score: 50.0,
        }
    }

    #[test]
    fn no_specialization_keeps_unit_multiplier() {
        let profile = compute_profile(&baseline(), &ProfilePolicy::default());

        assert!(approx_eq(profile.specialization_score, 1.0, 1e-9));
        assert!(approx_eq(profile.overall_score, 50.0, 1e-9));
    }

    #[test]
    fn multipliers_are_averaged_not_stacked() {
        let stats = StatsRecord {
            avg_autonomous_points: 18.0,
            avg_teleop_points: 45.0,
            avg_endgame_points: 22.0,
            avg_defense_rating: 8.0,
            ..baseline()
        };
        let profile = compute_profile(&stats, &ProfilePolicy::default());

        // (1.2 + 1.1 + 1.3 + 1.2) / 4 = 1.2
        assert!(approx_eq(profile.specialization_score, 1.2, 1e-9));
        assert!(approx_eq(profile.overall_score, 60.0, 1e-9));
    }

    #[test]
    fn single_endgame_specialty() {
        let stats = StatsRecord {
            avg_endgame_points: 21.0,
            ..baseline()
        };
        let profile = compute_profile(&stats, &ProfilePolicy::default());

        // (1.0 + 1.0 + 1.3 + 1.0) / 4 = 1.075
        assert!(approx_eq(profile.specialization_score, 1.075, 1e-9));
    }

    #[test]
    fn bars_are_strict() {
        let stats = StatsRecord {
            avg_autonomous_points: AUTONOMOUS_SPECIALIST_MIN,
            avg_teleop_points: TELEOP_SPECIALIST_MIN,
            avg_endgame_points: ENDGAME_SPECIALIST_MIN,
            avg_defense_rating: DEFENSE_SPECIALIST_MIN,
            ..baseline()
        };
        let profile = compute_profile(&stats, &ProfilePolicy::default());
        assert!(approx_eq(profile.specialization_score, 1.0, 1e-9));
    }

    #[test]
    fn total_score_is_capped_before_scaling() {
        let stats = StatsRecord {
            avg_total_score: 140.0,
            avg_defense_rating: 9.0,
            ..baseline()
        };
        let profile = compute_profile(&stats, &ProfilePolicy::default());

        // min(100, 140) * 1.05
        assert!(approx_eq(profile.overall_score, 105.0, 1e-9));
    }

    #[test]
    fn consistency_factor_saturates() {
        let policy = ProfilePolicy::default();

        let few = compute_profile(&StatsRecord { total_matches: 4, ..baseline() }, &policy);
        assert!(approx_eq(few.consistency_factor, 0.4, 1e-9));

        let exact = compute_profile(&StatsRecord { total_matches: 10, ..baseline() }, &policy);
        assert!(approx_eq(exact.consistency_factor, 1.0, 1e-9));

        let many = compute_profile(&StatsRecord { total_matches: 40, ..baseline() }, &policy);
        assert!(approx_eq(many.consistency_factor, 1.0, 1e-9));

        let none = compute_profile(&StatsRecord { total_matches: 0, ..baseline() }, &policy);
        assert!(approx_eq(none.consistency_factor, 0.0, 1e-9));
    }

    #[test]
    fn reliability_blends_sample_size_and_volatility() {
        let stats = StatsRecord {
            total_matches: 5,
            consistency_score: 80.0,
            ..baseline()
        };
        let profile = compute_profile(&stats, &ProfilePolicy::default());

        // 0.6 * 0.5 + 0.4 * 0.8 = 0.62
        assert!(approx_eq(profile.reliability_score, 0.62, 1e-9));
    }

    #[test]
    fn custom_saturation_policy() {
        let policy = ProfilePolicy {
            match_saturation: 20,
            ..ProfilePolicy::default()
        };
        let profile = compute_profile(&StatsRecord { total_matches: 10, ..baseline() }, &policy);
        assert!(approx_eq(profile.consistency_factor, 0.5, 1e-9));
    }
}

// Ranking engine: performance profiles, classification, trait extraction,
// compatibility, candidate evaluation and roster analysis.

pub mod category;
pub mod compatibility;
pub mod evaluate;
pub mod profile;
pub mod roster;
pub mod thresholds;
pub mod traits;

/// Clamp a score into `[0, 1]`. NaN collapses to 0.0.
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-0.25), 0.0);
        assert_eq!(clamp01(0.42), 0.42);
        assert_eq!(clamp01(1.7), 1.0);
        assert_eq!(clamp01(f64::INFINITY), 1.0);
        assert_eq!(clamp01(f64::NEG_INFINITY), 0.0);
        assert_eq!(clamp01(f64::NAN), 0.0);
    }
}

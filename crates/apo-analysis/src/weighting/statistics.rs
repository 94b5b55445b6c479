//! Per-array statistics used for importances and confidences.

use statrs::statistics::Statistics;

/// Arithmetic mean. Callers validate arrays as non-empty first.
pub fn feature_mean(values: &[f64]) -> f64 {
    values.iter().mean()
}

/// `1 − sqrt(population variance)`, clamped to `[0, 1]`.
pub fn feature_confidence(values: &[f64]) -> f64 {
    let variance = values.iter().population_variance();
    if !variance.is_finite() {
        return 0.0;
    }
    (1.0 - variance.sqrt()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_array_is_fully_confident() {
        assert!((feature_confidence(&[0.4, 0.4, 0.4]) - 1.0).abs() < 1e-12);
        assert!((feature_mean(&[0.4, 0.4, 0.4]) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_spread_lowers_confidence() {
        // Population std of [0, 1] is 0.5.
        assert!((feature_confidence(&[0.0, 1.0]) - 0.5).abs() < 1e-12);
        assert!((feature_mean(&[0.0, 1.0]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_value() {
        assert!((feature_confidence(&[0.3]) - 1.0).abs() < 1e-12);
    }
}

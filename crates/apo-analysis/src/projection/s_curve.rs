//! Logistic S-curve projections, one point per year.

use serde::{Deserialize, Serialize};

use super::types::{target_year, TimeProjection};

/// Confidence of the first projected year before decay.
const S_CURVE_BASE_CONFIDENCE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SCurve {
    pub steepness: f64,
    pub confidence_decay_per_year: f64,
}

impl Default for SCurve {
    fn default() -> Self {
        Self {
            steepness: 12.0,
            confidence_decay_per_year: 0.05,
        }
    }
}

impl SCurve {
    /// Adoption at progress `t ∈ [0, 1]`: `1 / (1 + e^(−k(t − 0.5)))`.
    pub fn sigmoid(&self, t: f64) -> f64 {
        1.0 / (1.0 + (-self.steepness * (t - 0.5)).exp())
    }

    /// `score(i) = base + growth × sigmoid(i / years)` for `i in 1..=years`.
    /// Callers bound `years`; points whose calendar year overflows are skipped.
    pub fn project(
        &self,
        base: f64,
        growth: f64,
        years: u32,
        current_year: i32,
    ) -> Vec<TimeProjection> {
        (1..=years)
            .filter_map(|i| {
                let year = target_year(current_year, i)?;
                let progress = f64::from(i) / f64::from(years);
                let score = (base + growth * self.sigmoid(progress)).clamp(0.0, 1.0);
                let confidence = (S_CURVE_BASE_CONFIDENCE
                    - f64::from(i) * self.confidence_decay_per_year)
                    .clamp(0.0, 1.0);
                let key_drivers = if i <= 2 {
                    vec!["Industry Adoption".to_string(), "Task Automation".to_string()]
                } else {
                    vec!["Emerging Technologies".to_string(), "Regional Adoption".to_string()]
                };
                Some(TimeProjection {
                    year,
                    score,
                    confidence,
                    key_drivers,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_midpoint_and_symmetry() {
        let c = SCurve::default();
        assert!((c.sigmoid(0.5) - 0.5).abs() < 1e-12);
        assert!((c.sigmoid(0.2) + c.sigmoid(0.8) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_projection_per_year() {
        let p = SCurve::default().project(0.3, 0.4, 5, 2026);
        assert_eq!(p.len(), 5);
        assert_eq!(p[0].year, 2027);
        assert_eq!(p[4].year, 2031);
        assert!(p.windows(2).all(|w| w[1].score >= w[0].score));
        assert!(p.windows(2).all(|w| w[1].confidence <= w[0].confidence));
        assert!((p[0].confidence - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_years_past_calendar_end_are_skipped() {
        let p = SCurve::default().project(0.5, 0.1, 3, i32::MAX - 1);
        assert_eq!(p.len(), 1);
        assert_eq!(p[0].year, i32::MAX);
    }

    #[test]
    fn test_zero_years_is_empty() {
        assert!(SCurve::default().project(0.5, 0.1, 0, 2026).is_empty());
    }
}

//! ProjectionGenerator: multi-year trajectories from adoption curves.
//!
//! Per horizon `h`: bucket (≤2 short, ≤5 medium, else long), the curve point
//! closest to `current_year + h`, `max = min(1, base × 1.5)`,
//! `score = base + (max − base) × adoption`. Confidence decays by
//! `0.05 × h` and never increases along the sorted horizons.

use apo_core::config::ProjectionConfig;
use apo_core::constants::NEUTRAL_SCORE;
use apo_core::types::research::{AutomationResearchData, HorizonBucket};

use crate::weighting::ModelPrediction;

use super::drivers::key_drivers;
use super::types::{target_year, ProjectionSeed, TimeProjection};

#[derive(Debug, Clone)]
pub struct ProjectionGenerator {
    config: ProjectionConfig,
    current_year: i32,
}

impl ProjectionGenerator {
    pub fn new(config: ProjectionConfig) -> Self {
        let current_year = config.current_year();
        Self {
            config,
            current_year,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ProjectionConfig::default())
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn max_horizon_years(&self) -> u32 {
        self.config.max_horizon_years
    }

    pub fn default_horizons(&self) -> &[u32] {
        &self.config.horizons
    }

    /// Project `prediction` over the configured horizons.
    pub fn generate(
        &self,
        prediction: &ModelPrediction,
        research: &AutomationResearchData,
    ) -> Vec<TimeProjection> {
        self.generate_from(ProjectionSeed::from(prediction), research, &self.config.horizons)
    }

    /// Project `seed` over `horizons` (sorted and deduplicated first).
    /// Horizons beyond `max_horizon_years` are dropped; callers taking
    /// horizons from input reject them before this point.
    pub fn generate_from(
        &self,
        seed: ProjectionSeed,
        research: &AutomationResearchData,
        horizons: &[u32],
    ) -> Vec<TimeProjection> {
        let mut horizons = horizons.to_vec();
        horizons.sort_unstable();
        horizons.dedup();
        let max_horizon = self.config.max_horizon_years;
        if horizons.last().is_some_and(|&h| h > max_horizon) {
            tracing::warn!(max_horizon, ?horizons, "dropping horizons beyond the maximum");
            horizons.retain(|&h| h <= max_horizon);
        }

        let base = if seed.score.is_finite() {
            seed.score.clamp(0.0, 1.0)
        } else {
            NEUTRAL_SCORE
        };
        let max_score = (base * self.config.max_score_multiplier).min(1.0);
        let mut running_confidence = f64::INFINITY;

        horizons
            .into_iter()
            .filter_map(|years| {
                let bucket = HorizonBucket::for_years(years);
                let target_year = target_year(self.current_year, years)?;

                let (adoption, penalty) =
                    match research.adoption_curves.closest_point(bucket, target_year) {
                        Some(point) if point.adoption.is_finite() => {
                            (point.adoption.clamp(0.0, 1.0), 0.0)
                        }
                        _ => {
                            tracing::warn!(
                                ?bucket,
                                target_year,
                                "no adoption curve data, using neutral adoption"
                            );
                            (NEUTRAL_SCORE, self.config.missing_curve_penalty)
                        }
                    };

                let score = (base + (max_score - base) * adoption).clamp(0.0, 1.0);
                let decayed = (seed.confidence
                    - f64::from(years) * self.config.confidence_decay_per_year
                    - penalty)
                    .max(0.0);
                running_confidence = running_confidence.min(decayed);

                Some(TimeProjection {
                    year: target_year,
                    score,
                    confidence: running_confidence,
                    key_drivers: key_drivers(
                        &seed.weights,
                        research,
                        bucket,
                        self.config.driver_weight_threshold,
                        self.config.max_key_drivers,
                    ),
                })
            })
            .collect()
    }
}

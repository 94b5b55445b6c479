//! ScenarioBlend: baseline weights × multipliers, renormalized, blended
//! with fixed per-factor coefficients.
//!
//! `adjusted = clamp(base × Σ(wᵢ × cᵢ) / Σcᵢ)`. This is a separate formula
//! from `AdaptiveWeighting` and is not interchangeable with it.

use apo_core::config::ScenarioConfig;
use apo_core::errors::{ScenarioError, WeightError};
use apo_core::{Factor, FactorScores, FactorWeights};

use super::types::FactorMultipliers;

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioBlend {
    baseline_weights: FactorWeights,
    coefficients: FactorScores,
}

impl ScenarioBlend {
    pub fn new(config: &ScenarioConfig) -> Self {
        Self {
            baseline_weights: config.baseline_weights,
            coefficients: config.coefficients,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&ScenarioConfig::default())
    }

    pub fn baseline_weights(&self) -> &FactorWeights {
        &self.baseline_weights
    }

    /// Apply `multipliers` to the baseline weights and renormalize.
    /// All-zero products fall back to the baseline.
    pub fn adjusted_weights(
        &self,
        scenario: &str,
        multipliers: &FactorMultipliers,
    ) -> Result<FactorWeights, ScenarioError> {
        for factor in Factor::ALL {
            let m = multipliers.get(factor);
            if !m.is_finite() || m < 0.0 {
                return Err(ScenarioError::InvalidMultiplier {
                    scenario: scenario.to_string(),
                    factor,
                    value: m,
                });
            }
        }
        let raw = FactorScores::from_fn(|f| self.baseline_weights.get(f) * multipliers.get(f));
        match FactorWeights::normalize(&raw) {
            Ok(weights) => Ok(weights),
            Err(WeightError::Degenerate) => {
                tracing::warn!(scenario, "all scenario weights zero, using baseline weights");
                Ok(self.baseline_weights)
            }
            // Inputs were checked finite and non-negative above.
            Err(_) => Ok(self.baseline_weights),
        }
    }

    pub fn adjusted_score(&self, base_score: f64, weights: &FactorWeights) -> f64 {
        let blended = self.coefficients.weighted_sum(weights);
        let total = self.coefficients.sum();
        if total <= 0.0 {
            return base_score.clamp(0.0, 1.0);
        }
        (base_score * blended / total).clamp(0.0, 1.0)
    }
}

//! AdaptiveWeighting: feature means → normalized occupation weights.
//!
//! Importance per factor is the mean of its feature array; weights are the
//! importances normalized to sum 1. Confidence per factor is
//! `1 − sqrt(population variance)`. Entries are cached per occupation and
//! returned unchanged until `update_model` nudges them.

use std::sync::Arc;

use apo_core::config::WeightsConfig;
use apo_core::errors::WeightError;
use apo_core::traits::WeightStore;
use apo_core::{ApoError, FactorAdjustment, FactorScores, FactorWeights};
use chrono::Utc;

use crate::features::OccupationFeatureVector;

use super::statistics::{feature_confidence, feature_mean};
use super::types::{estimate_time_horizon, ModelPrediction};

pub struct AdaptiveWeighting {
    base_weights: FactorWeights,
    learning_rate: f64,
    store: Arc<dyn WeightStore>,
}

impl AdaptiveWeighting {
    pub fn new(config: &WeightsConfig, store: Arc<dyn WeightStore>) -> Self {
        Self {
            base_weights: config.base,
            learning_rate: config.learning_rate,
            store,
        }
    }

    pub fn base_weights(&self) -> &FactorWeights {
        &self.base_weights
    }

    pub fn store(&self) -> &Arc<dyn WeightStore> {
        &self.store
    }

    /// Return the cached adjustment for `occupation_id`, computing it from
    /// `features` on first use.
    pub fn calculate_adjusted_weights(
        &self,
        occupation_id: &str,
        features: &OccupationFeatureVector,
    ) -> Result<FactorAdjustment, ApoError> {
        if let Some(cached) = self.store.get(occupation_id) {
            return Ok(cached);
        }
        features.validate()?;
        let adjustment = self.store.get_or_insert_with(occupation_id, &mut || {
            self.compute_adjustment(occupation_id, features)
        });
        Ok(adjustment)
    }

    fn compute_adjustment(
        &self,
        occupation_id: &str,
        features: &OccupationFeatureVector,
    ) -> FactorAdjustment {
        let importances = FactorScores::from_fn(|f| feature_mean(features.array(f)));
        let confidence_scores = FactorScores::from_fn(|f| feature_confidence(features.array(f)));

        let adjusted_weights = match FactorWeights::normalize(&importances) {
            Ok(weights) => weights,
            Err(err) => {
                tracing::warn!(
                    occupation_id,
                    error = %err,
                    "degenerate factor importances, using base weights"
                );
                self.base_weights
            }
        };

        tracing::debug!(occupation_id, ?adjusted_weights, "computed adjusted weights");

        FactorAdjustment {
            occupation_id: occupation_id.to_string(),
            base_weights: self.base_weights,
            adjusted_weights,
            confidence_scores,
            factor_importances: importances,
            last_updated: Utc::now(),
        }
    }

    /// Predict the automation score of `features` under `weights`.
    pub fn predict_automation_potential(
        &self,
        features: &OccupationFeatureVector,
        weights: &FactorWeights,
    ) -> Result<ModelPrediction, ApoError> {
        features.validate()?;
        weights.validate()?;

        let means = FactorScores::from_fn(|f| feature_mean(features.array(f)));
        let confidences = FactorScores::from_fn(|f| feature_confidence(features.array(f)));

        let predicted_score = means.weighted_sum(weights).clamp(0.0, 1.0);
        let confidence = confidences.weighted_sum(weights).clamp(0.0, 1.0);

        Ok(ModelPrediction {
            predicted_score,
            confidence,
            feature_importance: *weights,
            time_horizon_years: estimate_time_horizon(predicted_score),
        })
    }

    /// Nudge the cached weights toward factors that agree with an observed
    /// score. Returns `Ok(false)` when nothing is cached for the occupation.
    pub fn update_model(&self, occupation_id: &str, actual_score: f64) -> Result<bool, ApoError> {
        if !(actual_score.is_finite() && (0.0..=1.0).contains(&actual_score)) {
            return Err(WeightError::ScoreOutOfRange {
                value: actual_score,
            }
            .into());
        }
        let lr = self.learning_rate;
        let observed_high = actual_score > 0.5;

        let mut failure: Option<WeightError> = None;
        let existed = self.store.update(occupation_id, &mut |adj| {
            let nudged = FactorScores::from_fn(|f| {
                let agrees = (adj.factor_importances.get(f) >= 0.5) == observed_high;
                let scale = if agrees { 1.0 + lr } else { 1.0 - lr };
                adj.adjusted_weights.get(f) * scale
            });
            match FactorWeights::normalize(&nudged) {
                Ok(weights) => {
                    adj.adjusted_weights = weights;
                    adj.last_updated = Utc::now();
                }
                Err(err) => failure = Some(err),
            }
        });

        if let Some(err) = failure {
            return Err(err.into());
        }
        if existed {
            tracing::debug!(occupation_id, actual_score, "updated factor weights");
        } else {
            tracing::debug!(occupation_id, "update_model on uncached occupation ignored");
        }
        Ok(existed)
    }
}

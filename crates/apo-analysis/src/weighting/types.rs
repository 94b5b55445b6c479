//! Prediction output of the weighting model.

use apo_core::FactorWeights;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPrediction {
    /// Overall automation score in `[0, 1]`.
    pub predicted_score: f64,
    /// Weighted per-factor confidence in `[0, 1]`.
    pub confidence: f64,
    /// The weights the prediction was made with.
    pub feature_importance: FactorWeights,
    pub time_horizon_years: u32,
}

/// Years until the predicted level of automation, as a step function of
/// the score.
pub fn estimate_time_horizon(score: f64) -> u32 {
    if score >= 0.8 {
        2
    } else if score >= 0.6 {
        5
    } else if score >= 0.4 {
        10
    } else if score >= 0.2 {
        15
    } else {
        20
    }
}

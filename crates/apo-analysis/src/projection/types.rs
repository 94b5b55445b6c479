//! Projection types.

use apo_core::FactorWeights;
use serde::{Deserialize, Serialize};

use crate::weighting::ModelPrediction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeProjection {
    pub year: i32,
    pub score: f64,
    pub confidence: f64,
    pub key_drivers: Vec<String>,
}

/// Starting point of a trajectory: score, confidence, and the factor
/// weights used to pick key drivers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionSeed {
    pub score: f64,
    pub confidence: f64,
    pub weights: FactorWeights,
}

impl From<&ModelPrediction> for ProjectionSeed {
    fn from(p: &ModelPrediction) -> Self {
        Self {
            score: p.predicted_score,
            confidence: p.confidence,
            weights: p.feature_importance,
        }
    }
}

/// Calendar year `years` after `current_year`, `None` on overflow.
pub fn target_year(current_year: i32, years: u32) -> Option<i32> {
    i32::try_from(years)
        .ok()
        .and_then(|y| current_year.checked_add(y))
}

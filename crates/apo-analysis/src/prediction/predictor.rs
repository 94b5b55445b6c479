//! Thin orchestration over the feature extractor and the weighting model.

use apo_core::types::occupation::{OccupationTask, Skill};
use apo_core::types::research::AutomationResearchData;
use apo_core::types::semantic::OccupationAnalysis;
use apo_core::{ApoError, FactorAdjustment};

use crate::features::{FeatureExtractor, OccupationFeatureVector};
use crate::weighting::{AdaptiveWeighting, ModelPrediction};

/// Everything produced along the prediction path.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub features: OccupationFeatureVector,
    pub adjustment: FactorAdjustment,
    pub prediction: ModelPrediction,
}

pub struct Predictor<'a> {
    extractor: FeatureExtractor,
    weighting: &'a AdaptiveWeighting,
}

impl<'a> Predictor<'a> {
    pub fn new(extractor: FeatureExtractor, weighting: &'a AdaptiveWeighting) -> Self {
        Self {
            extractor,
            weighting,
        }
    }

    pub fn predict(
        &self,
        occupation_id: &str,
        tasks: &[OccupationTask],
        skills: &[Skill],
        research: &AutomationResearchData,
        analysis: Option<&OccupationAnalysis>,
    ) -> Result<PredictionOutcome, ApoError> {
        let features = self
            .extractor
            .extract_with_analysis(tasks, skills, research, analysis);
        let adjustment = self
            .weighting
            .calculate_adjusted_weights(occupation_id, &features)?;
        let prediction = self
            .weighting
            .predict_automation_potential(&features, &adjustment.adjusted_weights)?;

        tracing::debug!(
            occupation_id,
            score = prediction.predicted_score,
            confidence = prediction.confidence,
            horizon = prediction.time_horizon_years,
            "prediction complete"
        );

        Ok(PredictionOutcome {
            features,
            adjustment,
            prediction,
        })
    }
}

//! DynamicApoCalculator: adaptive weighting prediction projected along the
//! research adoption curves.

use std::sync::Arc;

use apo_core::config::SkillsConfig;
use apo_core::ApoError;

use crate::features::FeatureExtractor;
use crate::prediction::Predictor;
use crate::projection::ProjectionGenerator;
use crate::scenario::FactorBreakdown;
use crate::skills::SkillImpactAnalyzer;
use crate::weighting::AdaptiveWeighting;

use super::guidance::{recommendations, skills_impact};
use super::strategy::{ApoRequest, ApoStrategy};
use super::tasks::analyze_tasks;
use super::types::{ApoResult, DataSourceInfo};

pub struct DynamicApoCalculator {
    extractor: FeatureExtractor,
    weighting: Arc<AdaptiveWeighting>,
    projections: ProjectionGenerator,
    skills: Arc<SkillImpactAnalyzer>,
    skills_config: SkillsConfig,
}

impl DynamicApoCalculator {
    pub fn new(
        weighting: Arc<AdaptiveWeighting>,
        projections: ProjectionGenerator,
        skills: Arc<SkillImpactAnalyzer>,
        skills_config: SkillsConfig,
    ) -> Self {
        Self {
            extractor: FeatureExtractor::new(projections.current_year()),
            weighting,
            projections,
            skills,
            skills_config,
        }
    }
}

impl ApoStrategy for DynamicApoCalculator {
    fn name(&self) -> &'static str {
        "dynamic"
    }

    fn calculate(&self, request: &ApoRequest) -> Result<ApoResult, ApoError> {
        let analysis = request.analysis.as_ref();
        let outcome = Predictor::new(self.extractor, &self.weighting).predict(
            &request.occupation_id,
            &request.tasks,
            &request.skills,
            &request.research,
            analysis,
        )?;
        let prediction = &outcome.prediction;

        let time_projections = self.projections.generate(prediction, &request.research);
        let factor_breakdown = FactorBreakdown::from_weights(
            &prediction.feature_importance,
            prediction.predicted_score,
        );

        let skill_analyses =
            self.skills.analyze_skills_granular(&request.skills, analysis, &request.research);

        Ok(ApoResult {
            occupation_id: request.occupation_id.clone(),
            occupation_title: request.occupation_title.clone(),
            strategy: self.name().to_string(),
            overall_score: prediction.predicted_score,
            confidence: prediction.confidence,
            time_projections,
            factor_breakdown,
            skills_impact: skills_impact(&skill_analyses, &self.skills_config),
            recommendations: recommendations(prediction.predicted_score),
            task_analysis: analyze_tasks(&request.tasks, analysis),
            data_source_info: DataSourceInfo {
                research_data_date: request.research.last_updated.clone(),
                semantic_analysis_date: analysis.map(|a| a.last_updated.clone()),
            },
        })
    }
}

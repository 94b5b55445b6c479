//! ScenarioModeler: baseline prediction under fixed weights, then one
//! blended score and trajectory per scenario.

use apo_core::types::occupation::{OccupationTask, Skill};
use apo_core::types::research::AutomationResearchData;
use apo_core::errors::ScenarioError;
use apo_core::ApoError;

use crate::features::FeatureExtractor;
use crate::projection::{ProjectionGenerator, ProjectionSeed};
use crate::weighting::AdaptiveWeighting;

use super::blend::ScenarioBlend;
use super::types::{FactorBreakdown, ScenarioParams, ScenarioResult};

pub struct ScenarioModeler<'a> {
    extractor: FeatureExtractor,
    weighting: &'a AdaptiveWeighting,
    blend: &'a ScenarioBlend,
    projections: &'a ProjectionGenerator,
}

impl<'a> ScenarioModeler<'a> {
    pub fn new(
        extractor: FeatureExtractor,
        weighting: &'a AdaptiveWeighting,
        blend: &'a ScenarioBlend,
        projections: &'a ProjectionGenerator,
    ) -> Self {
        Self {
            extractor,
            weighting,
            blend,
            projections,
        }
    }

    pub fn model_scenarios(
        &self,
        occupation_id: &str,
        tasks: &[OccupationTask],
        skills: &[Skill],
        research: &AutomationResearchData,
        scenarios: &[ScenarioParams],
    ) -> Result<Vec<ScenarioResult>, ApoError> {
        let features = self.extractor.extract(tasks, skills, research);
        let baseline = self
            .weighting
            .predict_automation_potential(&features, self.blend.baseline_weights())?;

        let results = scenarios
            .iter()
            .map(|scenario| -> Result<ScenarioResult, ApoError> {
                let weights = self
                    .blend
                    .adjusted_weights(&scenario.name, &scenario.factor_adjustments)?;
                let adjusted_score = self.blend.adjusted_score(baseline.predicted_score, &weights);

                let max = self.projections.max_horizon_years();
                if let Some(&years) = scenario.time_horizon_years.iter().find(|&&h| h > max) {
                    return Err(ScenarioError::InvalidHorizon {
                        scenario: scenario.name.clone(),
                        years,
                        max,
                    }
                    .into());
                }
                let horizons = if scenario.time_horizon_years.is_empty() {
                    self.projections.default_horizons()
                } else {
                    scenario.time_horizon_years.as_slice()
                };
                let seed = ProjectionSeed {
                    score: adjusted_score,
                    confidence: baseline.confidence,
                    weights,
                };
                let time_projections = self.projections.generate_from(seed, research, horizons);

                Ok(ScenarioResult {
                    scenario_name: scenario.name.clone(),
                    scenario_description: scenario.description.clone(),
                    baseline_score: baseline.predicted_score,
                    adjusted_score,
                    adjusted_weights: weights,
                    time_projections,
                    factor_breakdown: FactorBreakdown::from_weights(&weights, adjusted_score),
                    confidence_score: baseline.confidence,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            occupation_id,
            scenarios = results.len(),
            baseline = baseline.predicted_score,
            "modeled scenarios"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weighting::InMemoryWeightStore;
    use apo_core::config::{ProjectionConfig, WeightsConfig};
    use apo_core::types::occupation::SkillCategory;
    use apo_core::Factor;
    use std::sync::Arc;

    struct Fixture {
        weighting: AdaptiveWeighting,
        blend: ScenarioBlend,
        projections: ProjectionGenerator,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                weighting: AdaptiveWeighting::new(
                    &WeightsConfig::default(),
                    Arc::new(InMemoryWeightStore::new()),
                ),
                blend: ScenarioBlend::with_defaults(),
                projections: ProjectionGenerator::new(ProjectionConfig {
                    current_year: Some(2026),
                    ..Default::default()
                }),
            }
        }

        fn modeler(&self) -> ScenarioModeler<'_> {
            ScenarioModeler::new(
                FeatureExtractor::new(2026),
                &self.weighting,
                &self.blend,
                &self.projections,
            )
        }
    }

    fn inputs() -> (Vec<OccupationTask>, Vec<Skill>, AutomationResearchData) {
        let tasks = vec![OccupationTask::new("t1", "Routine data entry and filing")];
        let skills = vec![Skill::new("s1", "Data Entry", SkillCategory::Technical)];
        let mut research = AutomationResearchData::default();
        research.overall_score = 0.7;
        (tasks, skills, research)
    }

    #[test]
    fn test_scenarios_differ_and_keep_order() {
        let fixture = Fixture::new();
        let (tasks, skills, research) = inputs();
        let scenarios = vec![
            ScenarioParams::new("fast tech").with_multiplier(Factor::EmergingTechImpact, 2.0),
            ScenarioParams::new("people first")
                .with_multiplier(Factor::CollaborationRequirements, 2.0)
                .with_horizons([3]),
        ];
        let results = fixture
            .modeler()
            .model_scenarios("occ", &tasks, &skills, &research, &scenarios)
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].scenario_name, "fast tech");
        assert_ne!(results[0].adjusted_score, results[1].adjusted_score);
        assert_eq!(results[0].baseline_score, results[1].baseline_score);
        assert_eq!(results[0].time_projections.len(), 3);
        assert_eq!(results[1].time_projections.len(), 1);
        assert_eq!(results[1].time_projections[0].year, 2029);
        assert!(results.iter().all(|r| r.adjusted_weights.validate().is_ok()));
    }

    #[test]
    fn test_scenarios_do_not_touch_weight_cache() {
        let fixture = Fixture::new();
        let (tasks, skills, research) = inputs();
        fixture
            .modeler()
            .model_scenarios("occ", &tasks, &skills, &research, &[ScenarioParams::new("x")])
            .unwrap();
        assert!(fixture.weighting.store().is_empty());
    }

    #[test]
    fn test_invalid_multiplier_is_error() {
        let fixture = Fixture::new();
        let (tasks, skills, research) = inputs();
        let bad = ScenarioParams::new("bad").with_multiplier(Factor::IndustryAdoption, -2.0);
        let err = fixture
            .modeler()
            .model_scenarios("occ", &tasks, &skills, &research, &[bad])
            .unwrap_err();
        assert!(matches!(err, ApoError::Scenario(_)));
    }

    #[test]
    fn test_horizon_beyond_maximum_is_error() {
        let fixture = Fixture::new();
        let (tasks, skills, research) = inputs();
        for years in [i32::MAX as u32, u32::MAX, 101] {
            let far = ScenarioParams::new("far").with_horizons([2, years]);
            let err = fixture
                .modeler()
                .model_scenarios("occ", &tasks, &skills, &research, &[far])
                .unwrap_err();
            assert!(matches!(
                err,
                ApoError::Scenario(ScenarioError::InvalidHorizon { years: y, max: 100, .. })
                    if y == years
            ));
        }
    }
}

//! ApoEngine: the facade over every APO component.
//!
//! Holds the configuration, the shared weight store, and one instance of
//! each component. All operations are synchronous; `calculate_batch` fans
//! out over rayon with one task per occupation.

use std::path::Path;
use std::sync::Arc;

use apo_core::errors::ProviderError;
use apo_core::traits::{OccupationDataProvider, ResearchDataProvider, SemanticAnalysisProvider};
use apo_core::types::occupation::{OccupationTask, Skill};
use apo_core::types::research::AutomationResearchData;
use apo_core::types::semantic::OccupationAnalysis;
use apo_core::{ApoConfig, ApoError, FactorAdjustment, WeightStore};
use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::apo::{ApoRequest, ApoResult, ApoStrategy, DynamicApoCalculator, EnhancedApoCalculator};
use crate::features::FeatureExtractor;
use crate::projection::{ProjectionGenerator, SCurve};
use crate::scenario::{ScenarioBlend, ScenarioModeler, ScenarioParams, ScenarioResult};
use crate::skills::relationships::validate_skill_relationships;
use crate::skills::{
    DetailedSkillAnalysis, RelationshipValidation, SkillCluster, SkillGapAnalysis, SkillGraph,
    SkillImpactAnalyzer, SkillRelationship,
};
use crate::weighting::{AdaptiveWeighting, InMemoryWeightStore};

/// External collaborators for `analyze_occupation`.
#[derive(Clone, Copy)]
pub struct DataProviders<'a> {
    pub occupations: &'a dyn OccupationDataProvider,
    pub research: &'a dyn ResearchDataProvider,
    pub semantic: Option<&'a dyn SemanticAnalysisProvider>,
}

pub struct ApoEngine {
    config: ApoConfig,
    weighting: Arc<AdaptiveWeighting>,
    projections: ProjectionGenerator,
    blend: ScenarioBlend,
    skills: Arc<SkillImpactAnalyzer>,
    dynamic: DynamicApoCalculator,
    enhanced: EnhancedApoCalculator,
}

impl ApoEngine {
    /// Validates `config` first; an invalid value is a `CONFIG_ERROR`.
    pub fn new(config: ApoConfig, store: Arc<dyn WeightStore>) -> Result<Self, ApoError> {
        config.validate()?;
        Ok(Self::build(config, store))
    }

    fn build(config: ApoConfig, store: Arc<dyn WeightStore>) -> Self {
        let weighting = Arc::new(AdaptiveWeighting::new(&config.weights, store));
        let projections = ProjectionGenerator::new(config.projection.clone());
        let blend = ScenarioBlend::new(&config.scenario);
        let skills = Arc::new(SkillImpactAnalyzer::new(&config.skills));
        let s_curve = SCurve {
            steepness: config.projection.s_curve_steepness,
            confidence_decay_per_year: config.projection.confidence_decay_per_year,
        };

        let dynamic = DynamicApoCalculator::new(
            Arc::clone(&weighting),
            projections.clone(),
            Arc::clone(&skills),
            config.skills.clone(),
        );
        let enhanced = EnhancedApoCalculator::new(
            projections.current_year(),
            projections.max_horizon_years(),
            s_curve,
            Arc::clone(&skills),
            config.skills.clone(),
        );

        info!(
            current_year = projections.current_year(),
            horizons = ?config.projection.horizons,
            "APO engine ready"
        );

        Self {
            config,
            weighting,
            projections,
            blend,
            skills,
            dynamic,
            enhanced,
        }
    }

    /// Default configuration over an in-memory weight store.
    pub fn with_defaults() -> Self {
        Self::build(ApoConfig::default(), Arc::new(InMemoryWeightStore::new()))
    }

    /// Loads `apo.toml` from `root` (defaults when absent).
    pub fn from_project_root(
        root: impl AsRef<Path>,
        store: Arc<dyn WeightStore>,
    ) -> Result<Self, ApoError> {
        let config = ApoConfig::load(root)?;
        Ok(Self::build(config, store))
    }

    pub fn config(&self) -> &ApoConfig {
        &self.config
    }

    pub fn dynamic(&self) -> &dyn ApoStrategy {
        &self.dynamic
    }

    pub fn enhanced(&self) -> &dyn ApoStrategy {
        &self.enhanced
    }

    /// Full APO result using the dynamic strategy.
    pub fn calculate(&self, request: &ApoRequest) -> Result<ApoResult, ApoError> {
        self.calculate_with(&self.dynamic, request)
    }

    #[instrument(
        skip_all,
        fields(occupation_id = %request.occupation_id, strategy = strategy.name())
    )]
    pub fn calculate_with(
        &self,
        strategy: &dyn ApoStrategy,
        request: &ApoRequest,
    ) -> Result<ApoResult, ApoError> {
        let result = strategy.calculate(request)?;
        info!(
            occupation_id = %request.occupation_id,
            strategy = strategy.name(),
            score = result.overall_score,
            confidence = result.confidence,
            "APO calculated"
        );
        Ok(result)
    }

    /// One result per request, in input order. A failing request does not
    /// affect the others.
    #[instrument(skip_all, fields(batch_size = requests.len()))]
    pub fn calculate_batch(&self, requests: &[ApoRequest]) -> Vec<Result<ApoResult, ApoError>> {
        let results: Vec<Result<ApoResult, ApoError>> = requests
            .par_iter()
            .map(|request| self.dynamic.calculate(request))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(total = requests.len(), failed, "batch calculated");
        results
    }

    /// Fetches occupation data, research, and (optionally) semantic analysis,
    /// then calculates with the dynamic strategy. Only a failed occupation
    /// lookup is fatal; missing research falls back to neutral data and a
    /// failed semantic analysis is skipped.
    #[instrument(skip(self, providers))]
    pub fn analyze_occupation(
        &self,
        occupation_id: &str,
        providers: DataProviders<'_>,
    ) -> Result<ApoResult, ApoError> {
        let occupation = providers.occupations.occupation(occupation_id)?;

        let research = match providers.research.research(occupation_id, &occupation.title) {
            Ok(research) => research,
            Err(err) => {
                warn!(occupation_id, error = %err, "research unavailable, using neutral data");
                AutomationResearchData::neutral(occupation_id)
            }
        };

        let analysis = providers.semantic.and_then(|semantic| {
            semantic
                .analyze(occupation_id, &occupation.tasks, &occupation.skills)
                .map_err(|err: ProviderError| {
                    warn!(occupation_id, error = %err, "semantic analysis unavailable");
                })
                .ok()
        });

        let request = ApoRequest {
            occupation_id: occupation_id.to_string(),
            occupation_title: occupation.title,
            tasks: occupation.tasks,
            skills: occupation.skills,
            research,
            analysis,
            time_horizon: None,
        };
        self.calculate(&request)
    }

    #[instrument(
        skip(self, tasks, skills, research, scenarios),
        fields(count = scenarios.len())
    )]
    pub fn model_scenarios(
        &self,
        occupation_id: &str,
        tasks: &[OccupationTask],
        skills: &[Skill],
        research: &AutomationResearchData,
        scenarios: &[ScenarioParams],
    ) -> Result<Vec<ScenarioResult>, ApoError> {
        let modeler = ScenarioModeler::new(
            FeatureExtractor::new(self.projections.current_year()),
            &self.weighting,
            &self.blend,
            &self.projections,
        );
        let results = modeler.model_scenarios(occupation_id, tasks, skills, research, scenarios)?;
        info!(occupation_id, scenarios = results.len(), "scenarios modeled");
        Ok(results)
    }

    pub fn analyze_skills(
        &self,
        skills: &[Skill],
        analysis: Option<&OccupationAnalysis>,
        research: &AutomationResearchData,
    ) -> Vec<DetailedSkillAnalysis> {
        self.skills.analyze_skills_granular(skills, analysis, research)
    }

    pub fn cluster_skills(&self, analyses: &[DetailedSkillAnalysis]) -> Vec<SkillCluster> {
        self.skills.cluster_skills(analyses)
    }

    pub fn analyze_skill_gaps(&self, current: &[Skill], required: &[Skill]) -> SkillGapAnalysis {
        self.skills.analyze_skill_gaps(current, required)
    }

    pub fn skill_graph(&self, relationships: &[SkillRelationship]) -> Result<SkillGraph, ApoError> {
        Ok(SkillGraph::build(relationships)?)
    }

    pub fn validate_skill_relationships(
        &self,
        relationships: &[SkillRelationship],
    ) -> Result<RelationshipValidation, ApoError> {
        let report = validate_skill_relationships(relationships)?;
        if report.has_cycle {
            warn!(skills = ?report.cyclic_skills, "skill relationships contain a cycle");
        }
        Ok(report)
    }

    /// Feedback on an observed score. `Ok(false)` when the occupation has no
    /// cached weights yet.
    #[instrument(skip(self))]
    pub fn update_model(&self, occupation_id: &str, actual_score: f64) -> Result<bool, ApoError> {
        self.weighting.update_model(occupation_id, actual_score)
    }

    /// Cached weights for `occupation_id`, if any.
    pub fn cached_weights(&self, occupation_id: &str) -> Option<FactorAdjustment> {
        self.weighting.store().get(occupation_id)
    }
}

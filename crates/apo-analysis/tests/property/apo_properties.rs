//! Property tests for weight normalization, prediction bounds, projection
//! confidence, scenario blending, skill gaps, clustering, and caching.

use std::sync::Arc;

use apo_analysis::features::OccupationFeatureVector;
use apo_analysis::projection::{ProjectionGenerator, ProjectionSeed};
use apo_analysis::scenario::{FactorMultipliers, ScenarioBlend};
use apo_analysis::skills::relationships::SkillGraph;
use apo_analysis::skills::{SkillImpactAnalyzer, SkillRelationship};
use apo_analysis::weighting::{AdaptiveWeighting, InMemoryWeightStore};
use apo_core::config::{ProjectionConfig, SkillsConfig, WeightsConfig};
use apo_core::types::occupation::{Skill, SkillCategory};
use apo_core::types::research::AutomationResearchData;
use apo_core::{Factor, FactorWeights, WeightStore};
use proptest::prelude::*;
use smallvec::SmallVec;

fn feature_array() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..=1.0, 1..=5)
}

prop_compose! {
    fn feature_vector()(
        task in feature_array(),
        collab in feature_array(),
        industry in feature_array(),
        emerging in feature_array(),
        regional in feature_array(),
    ) -> OccupationFeatureVector {
        OccupationFeatureVector {
            task_complexity: SmallVec::from_vec(task),
            collaboration: SmallVec::from_vec(collab),
            industry_adoption: SmallVec::from_vec(industry),
            emerging_tech: SmallVec::from_vec(emerging),
            regional: SmallVec::from_vec(regional),
        }
    }
}

fn weighting() -> AdaptiveWeighting {
    AdaptiveWeighting::new(&WeightsConfig::default(), Arc::new(InMemoryWeightStore::new()))
}

fn category() -> impl Strategy<Value = SkillCategory> {
    prop::sample::select(SkillCategory::ALL.to_vec())
}

prop_compose! {
    fn skills()(specs in prop::collection::vec(("[a-z]{3,8}", category()), 0..8)) -> Vec<Skill> {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (name, category))| Skill::new(format!("s{i}"), name, category))
            .collect()
    }
}

proptest! {
    #[test]
    fn weights_sum_to_one_after_updates(
        features in feature_vector(),
        scores in prop::collection::vec(0.0f64..=1.0, 0..20),
    ) {
        let weighting = weighting();
        let adjustment = weighting.calculate_adjusted_weights("occ", &features).unwrap();
        prop_assert!((adjustment.adjusted_weights.sum() - 1.0).abs() < 1e-6);

        for score in scores {
            prop_assert!(weighting.update_model("occ", score).unwrap());
            let current = weighting.store().get("occ").unwrap();
            prop_assert!((current.adjusted_weights.sum() - 1.0).abs() < 1e-6);
            prop_assert!(current.adjusted_weights.iter().all(|(_, w)| w >= 0.0));
        }
    }

    #[test]
    fn predictions_are_bounded(features in feature_vector()) {
        let weighting = weighting();
        let adjustment = weighting.calculate_adjusted_weights("occ", &features).unwrap();
        let prediction = weighting
            .predict_automation_potential(&features, &adjustment.adjusted_weights)
            .unwrap();
        prop_assert!((0.0..=1.0).contains(&prediction.predicted_score));
        prop_assert!((0.0..=1.0).contains(&prediction.confidence));
    }

    #[test]
    fn cached_adjustment_is_stable(features in feature_vector(), other in feature_vector()) {
        let weighting = weighting();
        let first = weighting.calculate_adjusted_weights("occ", &features).unwrap();
        let second = weighting.calculate_adjusted_weights("occ", &features).unwrap();
        prop_assert_eq!(&first, &second);
        // The cache is keyed by occupation only.
        let third = weighting.calculate_adjusted_weights("occ", &other).unwrap();
        prop_assert_eq!(&first, &third);
    }

    #[test]
    fn projection_confidence_never_increases(
        score in 0.0f64..=1.0,
        confidence in 0.0f64..=1.0,
        horizons in prop::collection::vec(0u32..30, 0..8),
    ) {
        let generator = ProjectionGenerator::new(ProjectionConfig {
            current_year: Some(2026),
            ..ProjectionConfig::default()
        });
        let seed = ProjectionSeed { score, confidence, weights: FactorWeights::BASELINE };
        let research = AutomationResearchData::neutral("occ");
        let projections = generator.generate_from(seed, &research, &horizons);

        prop_assert!(projections.windows(2).all(|w| w[1].confidence <= w[0].confidence));
        prop_assert!(projections.windows(2).all(|w| w[1].year > w[0].year));
        prop_assert!(projections.iter().all(|p| (0.0..=1.0).contains(&p.score)));
    }

    #[test]
    fn diverging_scenarios_diverge(
        base in 0.1f64..=1.0,
        industry in 1.5f64..3.0,
        collaboration in 1.5f64..3.0,
    ) {
        let blend = ScenarioBlend::with_defaults();
        let fast = blend
            .adjusted_weights("fast", &FactorMultipliers::default().with(Factor::IndustryAdoption, industry))
            .unwrap();
        let human = blend
            .adjusted_weights(
                "human",
                &FactorMultipliers::default().with(Factor::CollaborationRequirements, collaboration),
            )
            .unwrap();
        prop_assert!(blend.adjusted_score(base, &fast) > blend.adjusted_score(base, &human));
    }

    #[test]
    fn identical_skill_sets_have_no_gap(skills in skills()) {
        let analyzer = SkillImpactAnalyzer::with_defaults();
        let report = analyzer.analyze_skill_gaps(&skills, &skills);
        prop_assert!(report.missing_critical_skills.is_empty());
        prop_assert_eq!(report.overall_gap_score, 0.0);
    }

    #[test]
    fn isolated_skills_never_cluster(names in prop::collection::hash_set("[A-Za-z]{2,10}", 0..10)) {
        let relationships: Vec<SkillRelationship> =
            names.into_iter().map(SkillRelationship::new).collect();
        let graph = SkillGraph::build(&relationships).unwrap();
        prop_assert!(graph.identify_skill_clusters().is_empty());
    }

    #[test]
    fn skill_analysis_is_deterministic(skills in skills(), seed in any::<u64>()) {
        let config = SkillsConfig { jitter_seed: seed, ..SkillsConfig::default() };
        let research = AutomationResearchData::neutral("occ");
        let a = SkillImpactAnalyzer::new(&config).analyze_skills_granular(&skills, None, &research);
        let b = SkillImpactAnalyzer::new(&config).analyze_skills_granular(&skills, None, &research);
        prop_assert_eq!(&a, &b);
        for analysis in &a {
            prop_assert!((3..=5).contains(&analysis.components.len()));
            prop_assert!((0.0..=1.0).contains(&analysis.resilience));
        }
    }
}

//! End-to-end engine behavior over the shared fixtures.

use std::sync::Arc;

use apo_analysis::apo::{ApoRequest, RecommendationKind};
use apo_analysis::engine::DataProviders;
use apo_analysis::scenario::ScenarioParams;
use apo_analysis::skills::SkillRelationship;
use apo_analysis::weighting::InMemoryWeightStore;
use apo_analysis::ApoEngine;
use apo_core::{ApoConfig, ApoErrorCode, Factor};
use test_fixtures::*;

fn engine() -> ApoEngine {
    apo_core::tracing::init_tracing();
    let mut config = ApoConfig::default();
    config.projection.current_year = Some(FIXTURE_YEAR);
    ApoEngine::new(config, Arc::new(InMemoryWeightStore::new())).unwrap()
}

fn data_scientist_request() -> ApoRequest {
    ApoRequest::new(DATA_SCIENTIST_ID, "Data Scientists")
        .with_tasks(data_scientist_tasks())
        .with_skills(data_scientist_skills())
        .with_research(data_scientist_research())
}

#[test]
fn statistical_data_scientist_gets_three_projections() {
    let result = engine().calculate(&data_scientist_request()).unwrap();

    assert!((0.0..=1.0).contains(&result.overall_score));
    assert!((0.0..=1.0).contains(&result.confidence));
    let years: Vec<i32> = result.time_projections.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![FIXTURE_YEAR + 2, FIXTURE_YEAR + 5, FIXTURE_YEAR + 10]);

    let json = serde_json::to_value(&result.factor_breakdown).unwrap();
    for key in [
        "taskComplexity",
        "collaborationRequirements",
        "industryAdoption",
        "emergingTechImpact",
        "regionalFactors",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    let regional = &json["regionalFactors"];
    assert!(regional.get("highIncome").is_some());
    assert!(regional.get("lowIncome").is_some());
}

#[test]
fn rich_research_projections_lose_confidence_over_time() {
    let request = ApoRequest::new(DATA_ENTRY_ID, "Data Entry Keyers")
        .with_tasks(data_entry_tasks())
        .with_skills(data_entry_skills())
        .with_research(rich_research(DATA_ENTRY_ID))
        .with_analysis(data_entry_analysis());
    let result = engine().calculate(&request).unwrap();

    assert!(result
        .time_projections
        .windows(2)
        .all(|w| w[1].confidence <= w[0].confidence));
    assert_eq!(
        result.time_projections[0].key_drivers.first().map(String::as_str),
        Some("Intelligent document processing")
    );
    assert_eq!(
        result.data_source_info.semantic_analysis_date.as_deref(),
        Some("2026-02-01T00:00:00Z")
    );
    assert_eq!(result.task_analysis.high_risk_tasks.len(), 2);
    assert_eq!(result.recommendations[0].kind, RecommendationKind::SkillDevelopment);
}

#[test]
fn enhanced_strategy_projects_each_year() {
    let engine = engine();
    let request = data_scientist_request().with_time_horizon(4);
    let result = engine.calculate_with(engine.enhanced(), &request).unwrap();
    assert_eq!(result.time_projections.len(), 4);
    assert!((0.0..=1.0).contains(&result.overall_score));
}

#[test]
fn providers_drive_full_analysis() {
    let engine = engine();
    let research = FixtureResearch::default();
    let providers = DataProviders {
        occupations: &FixtureOccupations,
        research: &research,
        semantic: Some(&FixtureSemantic),
    };

    let entry = engine.analyze_occupation(DATA_ENTRY_ID, providers).unwrap();
    assert!(entry.data_source_info.semantic_analysis_date.is_some());

    // Semantic provider has nothing for this occupation; the call still succeeds.
    let scientist = engine.analyze_occupation(DATA_SCIENTIST_ID, providers).unwrap();
    assert!(scientist.data_source_info.semantic_analysis_date.is_none());
    assert_eq!(research.calls(), 2);

    let err = engine.analyze_occupation("00-0000.00", providers).unwrap_err();
    assert_eq!(err.error_code(), "PROVIDER_ERROR");
}

#[test]
fn failing_research_falls_back_to_neutral() {
    let engine = engine();
    let research = FixtureResearch::failing();
    let providers = DataProviders {
        occupations: &FixtureOccupations,
        research: &research,
        semantic: None,
    };
    let result = engine.analyze_occupation(DATA_ENTRY_ID, providers).unwrap();
    assert_eq!(result.time_projections.len(), 3);
    assert!(result.data_source_info.research_data_date.is_empty());
}

#[test]
fn scenarios_diverge_and_leave_cache_alone() {
    let engine = engine();
    let scenarios = vec![
        ScenarioParams::new("fast adoption")
            .with_multiplier(Factor::IndustryAdoption, 2.0)
            .with_multiplier(Factor::EmergingTechImpact, 1.5),
        ScenarioParams::new("human-centric")
            .with_multiplier(Factor::CollaborationRequirements, 2.0)
            .with_horizons(vec![1, 3]),
    ];
    let results = engine
        .model_scenarios(
            DATA_ENTRY_ID,
            &data_entry_tasks(),
            &data_entry_skills(),
            &rich_research(DATA_ENTRY_ID),
            &scenarios,
        )
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].baseline_score, results[1].baseline_score);
    assert_ne!(results[0].adjusted_score, results[1].adjusted_score);
    assert_eq!(results[0].time_projections.len(), 3);
    assert_eq!(results[1].time_projections.len(), 2);
    assert!(engine.cached_weights(DATA_ENTRY_ID).is_none());
}

#[test]
fn invalid_multiplier_is_rejected() {
    let scenarios = vec![ScenarioParams::new("bad").with_multiplier(Factor::TaskComplexity, -1.0)];
    let err = engine()
        .model_scenarios("x", &[], &[], &data_scientist_research(), &scenarios)
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn oversized_horizons_are_rejected_without_panicking() {
    let engine = engine();
    for years in [i32::MAX as u32, u32::MAX] {
        let scenarios = vec![ScenarioParams::new("far").with_horizons([years])];
        let err = engine
            .model_scenarios("x", &[], &[], &data_scientist_research(), &scenarios)
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    let request = data_scientist_request().with_time_horizon(u32::MAX);
    let err = engine.calculate_with(engine.enhanced(), &request).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn skills_pipeline() {
    let engine = engine();
    let research = rich_research(DATA_ENTRY_ID);
    let analyses = engine.analyze_skills(&data_entry_skills(), Some(&data_entry_analysis()), &research);
    assert_eq!(analyses.len(), 4);

    let clusters = engine.cluster_skills(&analyses);
    let names: Vec<&str> = clusters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Technical Skills", "Soft Skills", "Cognitive Skills", "Domain-specific Skills"]
    );

    let gaps = engine.analyze_skill_gaps(&data_entry_skills()[..2], &data_entry_skills());
    assert_eq!(gaps.missing_critical_skills.len(), 2);
    assert!(gaps.overall_gap_score > 0.0);
}

#[test]
fn skill_relationships() {
    let engine = engine();
    let relationships = vec![
        SkillRelationship::new("Python").with_related("SQL", 0.8),
        SkillRelationship::new("SQL").with_related("Data Modeling", 0.65),
    ];
    let graph = engine.skill_graph(&relationships).unwrap();
    assert_eq!(graph.identify_skill_clusters().len(), 1);
    assert!(engine.validate_skill_relationships(&relationships).unwrap().is_valid());

    let bad = vec![SkillRelationship::new("A").with_related("B", -1.2)];
    let err = engine.validate_skill_relationships(&bad).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn feedback_adjusts_cached_weights() {
    let engine = engine();
    let request = data_scientist_request();
    engine.calculate(&request).unwrap();
    let before = engine.cached_weights(DATA_SCIENTIST_ID).unwrap();

    assert!(engine.update_model(DATA_SCIENTIST_ID, 0.9).unwrap());
    let after = engine.cached_weights(DATA_SCIENTIST_ID).unwrap();
    assert_eq!(before.factor_importances, after.factor_importances);
    assert!((after.adjusted_weights.sum() - 1.0).abs() < 1e-6);

    let err = engine.update_model(DATA_SCIENTIST_ID, 1.5).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

//! EnhancedApoCalculator: keyword baseline, research and semantic factor
//! scores, and a per-year S-curve trajectory.
//!
//! Baseline `0.6 × taskScore + 0.4 × (1 − skillScore)`. Factor scores:
//! task complexity from the semantic complexity distribution, collaboration
//! from mid-range skill rankings, industry adoption and emerging tech from
//! research signals. Regional tiers are an aggregate of the research
//! provider's per-region impact scores, not separate per-region adoption,
//! labor, and policy models.
//! Overall and growth are the weighted average `0.3, 0.2, 0.25, 0.25`.
//! `time_horizon` above the configured maximum is rejected.

use std::sync::Arc;

use apo_core::config::SkillsConfig;
use apo_core::constants::NEUTRAL_SCORE;
use apo_core::errors::ProjectionError;
use apo_core::types::occupation::{OccupationTask, Skill};
use apo_core::types::research::{AutomationResearchData, RegionalScores};
use apo_core::types::semantic::OccupationAnalysis;
use apo_core::ApoError;

use crate::features::keywords::{routine_likelihood, skill_resistance};
use crate::features::research::{mean_or_neutral, sanitize};
use crate::features::ResearchSignals;
use crate::projection::SCurve;
use crate::scenario::{FactorBreakdown, RegionalBreakdown};
use crate::skills::SkillImpactAnalyzer;

use super::guidance::{recommendations, skills_impact};
use super::strategy::{ApoRequest, ApoStrategy};
use super::tasks::analyze_tasks;
use super::types::{ApoResult, DataSourceInfo};

const DEFAULT_TIME_HORIZON: u32 = 5;

/// Task complexity, collaboration, industry adoption, emerging tech.
const FACTOR_WEIGHTS: [f64; 4] = [0.3, 0.2, 0.25, 0.25];

/// North America, Europe, Asia, other.
const REGION_WEIGHTS: [f64; 4] = [0.35, 0.25, 0.3, 0.1];

/// Confidence multiplier when no semantic analysis backs the result.
const NO_ANALYSIS_CONFIDENCE: f64 = 0.8;

pub struct EnhancedApoCalculator {
    current_year: i32,
    max_horizon_years: u32,
    s_curve: SCurve,
    skills: Arc<SkillImpactAnalyzer>,
    skills_config: SkillsConfig,
}

impl EnhancedApoCalculator {
    pub fn new(
        current_year: i32,
        max_horizon_years: u32,
        s_curve: SCurve,
        skills: Arc<SkillImpactAnalyzer>,
        skills_config: SkillsConfig,
    ) -> Self {
        Self {
            current_year,
            max_horizon_years,
            s_curve,
            skills,
            skills_config,
        }
    }
}

impl ApoStrategy for EnhancedApoCalculator {
    fn name(&self) -> &'static str {
        "enhanced"
    }

    fn calculate(&self, request: &ApoRequest) -> Result<ApoResult, ApoError> {
        let years = request.time_horizon.unwrap_or(DEFAULT_TIME_HORIZON);
        if years > self.max_horizon_years {
            return Err(ProjectionError::HorizonOutOfRange {
                years,
                max: self.max_horizon_years,
            }
            .into());
        }

        let analysis = request.analysis.as_ref();
        let research = &request.research;
        let signals = ResearchSignals::aggregate(research, self.current_year);

        let baseline = baseline_apo(&request.tasks, &request.skills);
        let factor_breakdown = FactorBreakdown {
            task_complexity: task_complexity_score(&request.tasks, analysis),
            collaboration_requirements: collaboration_score(analysis),
            industry_adoption: sanitize(signals.average_adoption),
            emerging_tech_impact: signals.mention_density(),
            regional_factors: regional_tiers(&research.regional_impact.regional),
        };
        let overall_score = weighted_average(&factor_breakdown);

        let time_projections =
            self.s_curve
                .project(baseline, overall_score, years, self.current_year);

        let skill_analyses = self
            .skills
            .analyze_skills_granular(&request.skills, analysis, research);

        tracing::debug!(
            occupation_id = %request.occupation_id,
            baseline,
            overall_score,
            years,
            "enhanced calculation complete"
        );

        Ok(ApoResult {
            occupation_id: request.occupation_id.clone(),
            occupation_title: request.occupation_title.clone(),
            strategy: self.name().to_string(),
            overall_score,
            confidence: confidence(research, analysis),
            time_projections,
            factor_breakdown,
            skills_impact: skills_impact(&skill_analyses, &self.skills_config),
            recommendations: recommendations(overall_score),
            task_analysis: analyze_tasks(&request.tasks, analysis),
            data_source_info: DataSourceInfo {
                research_data_date: research.last_updated.clone(),
                semantic_analysis_date: analysis.map(|a| a.last_updated.clone()),
            },
        })
    }
}

/// Accepts either 0–1 weights or 1–5 ratings; absent means 0.5.
fn unit_weight(value: Option<f64>) -> f64 {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| if v > 1.0 { (v / 5.0).min(1.0) } else { v })
        .unwrap_or(NEUTRAL_SCORE)
}

fn baseline_apo(tasks: &[OccupationTask], skills: &[Skill]) -> f64 {
    let task_score = tasks
        .iter()
        .map(|t| {
            routine_likelihood(&t.description) * t.normalized_importance().unwrap_or(NEUTRAL_SCORE)
        })
        .sum::<f64>()
        / tasks.len().max(1) as f64;
    let skill_score = skills
        .iter()
        .map(|s| skill_resistance(&s.name) * unit_weight(s.importance) * unit_weight(s.level))
        .sum::<f64>()
        / skills.len().max(1) as f64;

    (task_score * 0.6 + (1.0 - skill_score) * 0.4).clamp(0.0, 1.0)
}

/// Complex (< 0.3) tasks count 0.2, mixed 0.5, routine (≥ 0.7) 0.8. Without
/// rankings, the mean keyword routine likelihood.
fn task_complexity_score(tasks: &[OccupationTask], analysis: Option<&OccupationAnalysis>) -> f64 {
    match analysis.filter(|a| !a.task_rankings.is_empty()) {
        Some(a) => {
            let weights: Vec<f64> = a
                .task_rankings
                .iter()
                .map(|r| match sanitize(r.automation_score) {
                    s if s < 0.3 => 0.2,
                    s if s < 0.7 => 0.5,
                    _ => 0.8,
                })
                .collect();
            mean_or_neutral(&weights)
        }
        None => {
            let likelihoods: Vec<f64> =
                tasks.iter().map(|t| routine_likelihood(&t.description)).collect();
            mean_or_neutral(&likelihoods)
        }
    }
}

/// Mid-range skill rankings signal human-AI collaboration potential `p`;
/// the factor is `0.8p + 0.2(1 − p)`.
fn collaboration_score(analysis: Option<&OccupationAnalysis>) -> f64 {
    let potentials: Vec<f64> = analysis
        .map(|a| {
            a.skill_rankings
                .iter()
                .map(|r| 1.0 - (sanitize(r.automation_score) - 0.5).abs() * 2.0)
                .collect()
        })
        .unwrap_or_default();
    let p = mean_or_neutral(&potentials);
    p * 0.8 + (1.0 - p) * 0.2
}

/// High income is the weighted mean of the four regional impact scores;
/// middle income is Asia and low income is other.
fn regional_tiers(regional: &RegionalScores) -> RegionalBreakdown {
    let scores = [
        sanitize(regional.north_america),
        sanitize(regional.europe),
        sanitize(regional.asia),
        sanitize(regional.other),
    ];
    RegionalBreakdown {
        high_income: scores.iter().zip(REGION_WEIGHTS).map(|(s, w)| s * w).sum(),
        middle_income: scores[2],
        low_income: scores[3],
    }
}

fn weighted_average(b: &FactorBreakdown) -> f64 {
    let scores = [
        b.task_complexity,
        b.collaboration_requirements,
        b.industry_adoption,
        b.emerging_tech_impact,
    ];
    let total: f64 = FACTOR_WEIGHTS.iter().sum();
    scores.iter().zip(FACTOR_WEIGHTS).map(|(s, w)| s * w).sum::<f64>() / total
}

/// Research confidence averaged with the analysis confidence when present,
/// discounted when the semantic analysis is missing.
fn confidence(research: &AutomationResearchData, analysis: Option<&OccupationAnalysis>) -> f64 {
    let research_confidence = sanitize(research.confidence_level.overall);
    match analysis.and_then(|a| a.confidence_score) {
        Some(c) if c.is_finite() => (research_confidence + c.clamp(0.0, 1.0)) / 2.0,
        _ => research_confidence * NO_ANALYSIS_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apo_core::types::occupation::SkillCategory;
    use apo_core::ApoErrorCode;
    use apo_core::types::semantic::{SkillAutomationRanking, TaskAutomationRanking};

    fn calculator() -> EnhancedApoCalculator {
        EnhancedApoCalculator::new(
            2026,
            apo_core::constants::MAX_HORIZON_YEARS,
            SCurve::default(),
            Arc::new(SkillImpactAnalyzer::with_defaults()),
            SkillsConfig::default(),
        )
    }

    #[test]
    fn test_baseline_formula() {
        let tasks = vec![OccupationTask::new("t1", "Routine data entry")];
        let skills = vec![Skill::new("s1", "Critical Thinking", SkillCategory::Cognitive)];
        // task: (0.5 + 0.05 * 2) * 0.5 = 0.3; skill: 0.8 * 0.5 * 0.5 = 0.2
        let expected = 0.3 * 0.6 + (1.0 - 0.2) * 0.4;
        assert!((baseline_apo(&tasks, &skills) - expected).abs() < 1e-12);
        assert!((baseline_apo(&[], &[]) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_semantic_factors() {
        let analysis = OccupationAnalysis {
            task_rankings: vec![
                TaskAutomationRanking {
                    automation_score: 0.9,
                    ..TaskAutomationRanking::default()
                },
                TaskAutomationRanking {
                    automation_score: 0.1,
                    ..TaskAutomationRanking::default()
                },
            ],
            skill_rankings: vec![SkillAutomationRanking {
                automation_score: 0.5,
                ..SkillAutomationRanking::default()
            }],
            ..OccupationAnalysis::default()
        };
        assert!((task_complexity_score(&[], Some(&analysis)) - 0.5).abs() < 1e-12);
        assert!((collaboration_score(Some(&analysis)) - 0.8).abs() < 1e-12);
        assert!((collaboration_score(None) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_regional_tiers_default_neutral() {
        let tiers = regional_tiers(&RegionalScores::default());
        assert!((tiers.high_income - 0.5).abs() < 1e-12);
        assert_eq!(tiers.middle_income, 0.5);
    }

    #[test]
    fn test_projection_per_year() {
        let request = ApoRequest::new("x", "X").with_time_horizon(3);
        let result = calculator().calculate(&request).unwrap();
        assert_eq!(result.strategy, "enhanced");
        assert_eq!(result.time_projections.len(), 3);
        assert_eq!(result.time_projections[0].year, 2027);
        assert!((0.0..=1.0).contains(&result.overall_score));
        assert!((0.0..=1.0).contains(&result.confidence));

        let default_horizon = calculator().calculate(&ApoRequest::new("x", "X")).unwrap();
        assert_eq!(default_horizon.time_projections.len(), 5);
    }

    #[test]
    fn test_time_horizon_beyond_maximum_is_invalid_input() {
        let request = ApoRequest::new("x", "X").with_time_horizon(u32::MAX);
        let err = calculator().calculate(&request).unwrap_err();
        assert!(matches!(
            err,
            ApoError::Projection(ProjectionError::HorizonOutOfRange { years: u32::MAX, .. })
        ));
        assert_eq!(err.error_code(), apo_core::errors::error_codes::INVALID_INPUT);

        let request = ApoRequest::new("x", "X").with_time_horizon(100);
        assert_eq!(calculator().calculate(&request).unwrap().time_projections.len(), 100);
    }

    #[test]
    fn test_analysis_raises_confidence_weighting() {
        let mut research = AutomationResearchData::neutral("x");
        research.confidence_level.overall = 0.6;
        let analysis = OccupationAnalysis {
            confidence_score: Some(1.0),
            ..OccupationAnalysis::default()
        };
        assert!((confidence(&research, Some(&analysis)) - 0.8).abs() < 1e-12);
        assert!((confidence(&research, None) - 0.48).abs() < 1e-12);
    }
}

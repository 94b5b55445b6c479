//! FeatureExtractor: deterministic feature vectors from occupation data.
//!
//! Total over any input: empty tasks, skills, or research yield neutral
//! 0.5 values, never empty arrays.

use apo_core::constants::NEUTRAL_SCORE;
use apo_core::types::occupation::{OccupationTask, Skill, SkillCategory};
use apo_core::types::research::{AdoptionCurves, AdoptionPoint, AutomationResearchData};
use apo_core::types::semantic::OccupationAnalysis;
use smallvec::smallvec;

use super::keywords::{
    contains_any, routine_likelihood, task_potential, COLLABORATIVE_CATEGORIES,
    COMPLEXITY_INDICATORS, HIGH_RESISTANCE_SKILLS, INTERPERSONAL_KEYWORDS,
};
use super::research::{mean_or_neutral, ResearchSignals};
use super::types::{FeatureArray, OccupationFeatureVector};

/// Extracts feature vectors. Holds the base year used for research recency.
#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor {
    current_year: i32,
}

impl FeatureExtractor {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn extract(
        &self,
        tasks: &[OccupationTask],
        skills: &[Skill],
        research: &AutomationResearchData,
    ) -> OccupationFeatureVector {
        self.extract_with_analysis(tasks, skills, research, None)
    }

    pub fn extract_with_analysis(
        &self,
        tasks: &[OccupationTask],
        skills: &[Skill],
        research: &AutomationResearchData,
        analysis: Option<&OccupationAnalysis>,
    ) -> OccupationFeatureVector {
        let signals = ResearchSignals::aggregate(research, self.current_year);

        let vector = OccupationFeatureVector {
            task_complexity: finish(task_complexity_features(tasks, analysis)),
            collaboration: finish(collaboration_features(tasks, skills, analysis)),
            industry_adoption: finish(industry_adoption_features(&signals, &research.adoption_curves)),
            emerging_tech: finish(emerging_tech_features(&signals)),
            regional: finish(regional_features(research)),
        };

        tracing::debug!(
            tasks = tasks.len(),
            skills = skills.len(),
            sources = research.source_count(),
            has_analysis = analysis.is_some(),
            "extracted feature vector"
        );
        vector
    }
}

fn task_complexity_features(
    tasks: &[OccupationTask],
    analysis: Option<&OccupationAnalysis>,
) -> FeatureArray {
    let likelihoods: Vec<f64> = tasks.iter().map(|t| routine_likelihood(&t.description)).collect();
    let potentials: Vec<f64> = tasks.iter().map(|t| task_potential(&t.description)).collect();

    let non_complex = one_minus_share(tasks, |t| {
        contains_any(&t.description, COMPLEXITY_INDICATORS)
    });

    let (weighted, total_importance) = tasks.iter().zip(&likelihoods).fold(
        (0.0, 0.0),
        |(sum, total), (task, likelihood)| {
            let importance = task.normalized_importance().unwrap_or(NEUTRAL_SCORE);
            (sum + likelihood * importance, total + importance)
        },
    );
    let importance_weighted = if total_importance > 0.0 {
        weighted / total_importance
    } else {
        NEUTRAL_SCORE
    };

    let semantic = analysis
        .map(|a| {
            let scores: Vec<f64> = a.task_rankings.iter().map(|r| r.automation_score).collect();
            mean_or_neutral(&scores)
        })
        .unwrap_or(NEUTRAL_SCORE);

    smallvec![
        mean_or_neutral(&likelihoods),
        mean_or_neutral(&potentials),
        non_complex,
        importance_weighted,
        semantic,
    ]
}

fn collaboration_features(
    tasks: &[OccupationTask],
    skills: &[Skill],
    analysis: Option<&OccupationAnalysis>,
) -> FeatureArray {
    let solitary_tasks = one_minus_share(tasks, |t| {
        contains_any(&t.description, INTERPERSONAL_KEYWORDS)
    });
    let non_soft = one_minus_share(skills, |s| s.category == SkillCategory::Soft);
    let non_resistant = one_minus_share(skills, |s| contains_any(&s.name, HIGH_RESISTANCE_SKILLS));

    let semantic = analysis
        .filter(|a| !a.skill_rankings.is_empty())
        .map(|a| {
            let potentials: Vec<f64> = a
                .skill_rankings
                .iter()
                .map(|r| 1.0 - (r.automation_score - 0.5).abs() * 2.0)
                .collect();
            let p = mean_or_neutral(&potentials);
            p * 0.8 + (1.0 - p) * 0.2
        })
        .unwrap_or(NEUTRAL_SCORE);

    let categorized: Vec<&str> = tasks.iter().filter_map(|t| t.category.as_deref()).collect();
    let non_collaborative_categories =
        one_minus_share(&categorized, |c| contains_any(c, COLLABORATIVE_CATEGORIES));

    smallvec![
        solitary_tasks,
        non_soft,
        non_resistant,
        semantic,
        non_collaborative_categories,
    ]
}

fn industry_adoption_features(signals: &ResearchSignals, curves: &AdoptionCurves) -> FeatureArray {
    smallvec![
        signals.overall_score,
        signals.average_adoption,
        latest_adoption(&curves.short_term),
        latest_adoption(&curves.medium_term),
        latest_adoption(&curves.long_term),
    ]
}

fn emerging_tech_features(signals: &ResearchSignals) -> FeatureArray {
    smallvec![
        signals.mention_density(),
        signals.mean_trend_impact,
        signals.paper_consensus,
        signals.short_term_trend_share,
        signals.displacement_sentiment(),
    ]
}

fn regional_features(research: &AutomationResearchData) -> FeatureArray {
    let impact = &research.regional_impact;
    smallvec![
        impact.global,
        impact.regional.north_america,
        impact.regional.europe,
        impact.regional.asia,
        impact.regional.other,
    ]
}

/// `1 − share of items matching`, neutral for an empty slice.
fn one_minus_share<T>(items: &[T], pred: impl Fn(&T) -> bool) -> f64 {
    if items.is_empty() {
        return NEUTRAL_SCORE;
    }
    let hits = items.iter().filter(|item| pred(item)).count();
    1.0 - hits as f64 / items.len() as f64
}

fn latest_adoption(curve: &[AdoptionPoint]) -> f64 {
    curve
        .iter()
        .max_by_key(|p| p.year)
        .map(|p| p.adoption)
        .unwrap_or(NEUTRAL_SCORE)
}

/// Replace non-finite values with neutral and clamp into `[0, 1]`.
fn finish(mut values: FeatureArray) -> FeatureArray {
    for v in values.iter_mut() {
        *v = if v.is_finite() {
            v.clamp(0.0, 1.0)
        } else {
            NEUTRAL_SCORE
        };
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use apo_core::constants::FEATURE_DIM;
    use apo_core::types::semantic::{SkillAutomationRanking, TaskAutomationRanking};
    use apo_core::Factor;

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::new(2026)
    }

    #[test]
    fn test_empty_inputs_are_neutral() {
        let v = extractor().extract(&[], &[], &AutomationResearchData::default());
        assert!(v.validate().is_ok());
        for factor in Factor::ALL {
            let values = v.array(factor);
            assert_eq!(values.len(), FEATURE_DIM);
            assert!(values.iter().all(|&x| (x - NEUTRAL_SCORE).abs() < 1e-12), "{factor}: {values:?}");
        }
    }

    #[test]
    fn test_routine_tasks_raise_task_complexity_propensity() {
        let routine = vec![OccupationTask::new("t1", "Routine data entry and filing")];
        let complex = vec![OccupationTask::new("t1", "Complex strategic negotiation")];
        let research = AutomationResearchData::default();
        let a = extractor().extract(&routine, &[], &research);
        let b = extractor().extract(&complex, &[], &research);
        assert!(a.task_complexity[0] > b.task_complexity[0]);
        assert!(a.task_complexity[2] > b.task_complexity[2]);
    }

    #[test]
    fn test_soft_skills_lower_collaboration_propensity() {
        let skills = vec![
            Skill::new("s1", "Active Listening", SkillCategory::Soft),
            Skill::new("s2", "Leadership", SkillCategory::Soft),
        ];
        let v = extractor().extract(&[], &skills, &AutomationResearchData::default());
        assert_eq!(v.collaboration[1], 0.0);
        assert!((v.collaboration[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_analysis_feeds_semantic_features() {
        let analysis = OccupationAnalysis {
            task_rankings: vec![TaskAutomationRanking {
                task_id: "t1".into(),
                automation_score: 0.9,
                ..Default::default()
            }],
            skill_rankings: vec![SkillAutomationRanking {
                skill_id: "s1".into(),
                automation_score: 0.5,
                ..Default::default()
            }],
            ..Default::default()
        };
        let v = extractor().extract_with_analysis(
            &[],
            &[],
            &AutomationResearchData::default(),
            Some(&analysis),
        );
        assert!((v.task_complexity[4] - 0.9).abs() < 1e-12);
        // p = 1 for a perfectly balanced skill ranking.
        assert!((v.collaboration[3] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_latest_curve_point_and_sanitizing() {
        let mut research = AutomationResearchData::default();
        research.overall_score = f64::NAN;
        research.regional_impact.global = 1.7;
        research.adoption_curves.long_term = vec![
            AdoptionPoint { year: 2030, adoption: 0.4 },
            AdoptionPoint { year: 2035, adoption: 0.7 },
        ];
        let v = extractor().extract(&[], &[], &research);
        assert_eq!(v.industry_adoption[0], NEUTRAL_SCORE);
        assert!((v.industry_adoption[4] - 0.7).abs() < 1e-12);
        assert_eq!(v.regional[0], 1.0);
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let tasks = vec![OccupationTask::new("t1", "Analyze data using statistical methods")];
        let skills = vec![Skill::new("s1", "Machine Learning", SkillCategory::Technical)];
        let research = AutomationResearchData::default();
        assert_eq!(
            extractor().extract(&tasks, &skills, &research),
            extractor().extract(&tasks, &skills, &research)
        );
    }
}

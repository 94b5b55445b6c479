//! Recommendations, emerging skills, and skill risk buckets.

use apo_core::config::SkillsConfig;
use apo_core::types::occupation::{Skill, SkillCategory};
use apo_core::types::research::Timeframe;

use crate::skills::DetailedSkillAnalysis;

use super::types::{ImpactLevel, Recommendation, RecommendationKind, SkillsImpact};

const CAREER_PIVOT_FROM: f64 = 0.7;
const INDUSTRY_CHANGE_FROM: f64 = 0.85;

pub fn recommendations(overall_score: f64) -> Vec<Recommendation> {
    let mut out = vec![Recommendation {
        kind: RecommendationKind::SkillDevelopment,
        title: "Develop AI-Resistant Skills".into(),
        description: "Focus on developing skills that are difficult to automate, such as creative \
                      problem solving, emotional intelligence, and ethical decision making."
            .into(),
        timeframe: Timeframe::ShortTerm,
        impact: ImpactLevel::High,
    }];

    if overall_score >= CAREER_PIVOT_FROM {
        out.push(Recommendation {
            kind: RecommendationKind::CareerPivot,
            title: "Consider Career Transition".into(),
            description: "Explore related occupations with lower automation potential that \
                          leverage your transferable skills."
                .into(),
            timeframe: Timeframe::MediumTerm,
            impact: ImpactLevel::High,
        });
    }

    out.push(Recommendation {
        kind: RecommendationKind::Education,
        title: "Pursue Continuous Learning".into(),
        description: "Engage in ongoing education to stay ahead of technological changes in your \
                      field."
            .into(),
        timeframe: Timeframe::MediumTerm,
        impact: ImpactLevel::Medium,
    });

    if overall_score >= INDUSTRY_CHANGE_FROM {
        out.push(Recommendation {
            kind: RecommendationKind::IndustryChange,
            title: "Explore Emerging Industries".into(),
            description: "Consider transitioning to industries with lower automation potential \
                          and growing demand for human workers."
                .into(),
            timeframe: Timeframe::LongTerm,
            impact: ImpactLevel::High,
        });
    }

    out
}

pub fn emerging_skills() -> Vec<Skill> {
    vec![
        Skill::new("emerging-1", "AI System Oversight", SkillCategory::Technical).with_description(
            "Monitoring and managing AI systems to ensure they operate as intended",
        ),
        Skill::new("emerging-2", "Human-AI Collaboration", SkillCategory::Soft).with_description(
            "Working effectively alongside AI systems to achieve enhanced outcomes",
        ),
        Skill::new("emerging-3", "Ethical Technology Implementation", SkillCategory::Cognitive)
            .with_description(
                "Ensuring technology is implemented in ways that align with ethical principles",
            ),
    ]
}

/// Buckets analyzed skills by overall score: high at or above the high
/// threshold, moderate at or above the moderate one, low below.
pub fn skills_impact(analyses: &[DetailedSkillAnalysis], config: &SkillsConfig) -> SkillsImpact {
    let mut impact = SkillsImpact {
        emerging_skills: emerging_skills(),
        ..SkillsImpact::default()
    };
    for analysis in analyses {
        let bucket = if analysis.overall_score >= config.high_risk_threshold {
            &mut impact.high_risk
        } else if analysis.overall_score >= config.moderate_risk_threshold {
            &mut impact.moderate_risk
        } else {
            &mut impact.low_risk
        };
        bucket.push(analysis.skill.clone());
    }
    impact
}

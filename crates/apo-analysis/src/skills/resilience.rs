//! Skill resilience against automation.

use apo_core::types::occupation::Skill;
use apo_core::types::research::AutomationResearchData;

use super::types::SkillComponent;

/// `0.6 * (1 - mean component score) + 0.3 * (1 - category factor) + trend
/// adjustment`, clamped to `[0, 1]`.
pub fn resilience(skill: &Skill, components: &[SkillComponent], research: &AutomationResearchData) -> f64 {
    let mean = if components.is_empty() {
        skill.category.resistance_factor()
    } else {
        components.iter().map(|c| c.automation_score).sum::<f64>() / components.len() as f64
    };
    let base = 0.6 * (1.0 - mean) + 0.3 * (1.0 - skill.category.resistance_factor());
    (base + trend_adjustment(&skill.name, research)).clamp(0.0, 1.0)
}

/// `0.1 - 0.2 * mean impact` over trends whose name, description, or
/// technologies mention the skill; zero when none do.
pub fn trend_adjustment(skill_name: &str, research: &AutomationResearchData) -> f64 {
    let needle = skill_name.to_lowercase();
    if needle.is_empty() {
        return 0.0;
    }
    let impacts: Vec<f64> = research
        .trends
        .iter()
        .filter(|t| {
            t.trend_name.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
                || t.relevant_technologies.iter().any(|tech| tech.to_lowercase().contains(&needle))
        })
        .map(|t| t.impact_score.clamp(0.0, 1.0))
        .collect();

    if impacts.is_empty() {
        0.0
    } else {
        0.1 - 0.2 * (impacts.iter().sum::<f64>() / impacts.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apo_core::types::occupation::SkillCategory;
    use apo_core::types::research::{AutomationTrend, Timeframe};

    fn trend(name: &str, impact: f64) -> AutomationTrend {
        AutomationTrend {
            trend_name: name.into(),
            description: String::new(),
            impact_score: impact,
            timeframe: Timeframe::ShortTerm,
            relevant_technologies: vec![],
            sources: vec![],
        }
    }

    #[test]
    fn test_no_trends_no_adjustment() {
        let research = AutomationResearchData::neutral("x");
        assert_eq!(trend_adjustment("Python", &research), 0.0);
    }

    #[test]
    fn test_matching_trend_lowers_resilience() {
        let mut research = AutomationResearchData::neutral("x");
        research.trends.push(trend("Python code generation", 1.0));
        research.trends.push(trend("Robotics", 0.0));
        assert!((trend_adjustment("python", &research) + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_resilience_formula() {
        let skill = Skill::new("s1", "Empathy", SkillCategory::Soft);
        let comps = vec![SkillComponent {
            name: "c".into(),
            description: String::new(),
            automation_score: 0.3,
            confidence_score: 0.7,
            time_horizon_years: 16,
        }];
        let r = resilience(&skill, &comps, &AutomationResearchData::neutral("x"));
        assert!((r - (0.6 * 0.7 + 0.3 * 0.7)).abs() < 1e-12);
    }
}

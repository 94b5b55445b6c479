//! Development paths toward a target skill.

use apo_core::types::occupation::Skill;

use super::types::{Milestone, SkillDevelopmentPath};

const TIME_TO_MASTERY: &str = "12-18 months";

/// Targets the first alternative when the skill is more likely automated
/// than not (`overall_score > 0.5`), otherwise deepens the skill itself.
pub fn development_path(skill: &Skill, overall_score: f64, alternatives: &[Skill]) -> SkillDevelopmentPath {
    let target = match alternatives.first() {
        Some(first) if overall_score > 0.5 => first.clone(),
        _ => skill.clone(),
    };
    let t = &target.name;

    let milestones = vec![
        Milestone {
            name: "Foundation Building".into(),
            description: format!("Develop basic understanding and competency in {t}"),
            timeframe: "1-3 months".into(),
            resources: resources(&["Online courses", "Introductory books", "Community forums"]),
        },
        Milestone {
            name: "Practical Application".into(),
            description: format!("Apply {t} in real-world scenarios"),
            timeframe: "3-6 months".into(),
            resources: resources(&["Project-based learning", "Mentorship", "Case studies"]),
        },
        Milestone {
            name: "Advanced Mastery".into(),
            description: format!("Develop expertise in {t} and ability to teach others"),
            timeframe: "6-12 months".into(),
            resources: resources(&[
                "Advanced workshops",
                "Professional certification",
                "Teaching opportunities",
            ]),
        },
    ];

    SkillDevelopmentPath {
        target_skill: target,
        milestones,
        estimated_time_to_mastery: TIME_TO_MASTERY.to_string(),
        complementary_skills: alternatives.iter().take(2).cloned().collect(),
    }
}

fn resources(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::alternatives::alternatives_for;
    use apo_core::types::occupation::SkillCategory;

    #[test]
    fn test_high_score_targets_alternative() {
        let skill = Skill::new("s1", "Data Entry", SkillCategory::Technical);
        let alts = alternatives_for(skill.category, 0.8);
        let path = development_path(&skill, 0.8, &alts);
        assert_eq!(path.target_skill.id, "tech-alt-1");
        assert_eq!(path.milestones.len(), 3);
        assert_eq!(path.complementary_skills.len(), 2);
        assert_eq!(path.estimated_time_to_mastery, "12-18 months");
        assert!(path.milestones[0].description.ends_with("AI System Design"));
    }

    #[test]
    fn test_boundary_score_keeps_skill() {
        let skill = Skill::new("s2", "Negotiation", SkillCategory::Soft);
        let alts = alternatives_for(skill.category, 0.5);
        let path = development_path(&skill, 0.5, &alts);
        assert_eq!(path.target_skill.id, "s2");
    }
}

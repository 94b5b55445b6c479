//! Category clustering of analyzed skills.

use apo_core::types::occupation::SkillCategory;

use super::types::{DetailedSkillAnalysis, SkillCluster, TrendDirection};

/// Groups analyses by category in `SkillCategory::ALL` order. Empty
/// categories produce no cluster.
pub fn cluster_by_category(analyses: &[DetailedSkillAnalysis]) -> Vec<SkillCluster> {
    SkillCategory::ALL
        .iter()
        .filter_map(|category| {
            let members: Vec<&DetailedSkillAnalysis> =
                analyses.iter().filter(|a| a.skill.category == *category).collect();
            if members.is_empty() {
                return None;
            }
            let n = members.len() as f64;
            let average_automation_score = members.iter().map(|a| a.overall_score).sum::<f64>() / n;
            let average_time_horizon = members.iter().map(|a| a.time_horizon).sum::<f64>() / n;

            Some(SkillCluster {
                name: format!("{} Skills", category.title()),
                description: format!("Skills related to {} capabilities", category.name()),
                skills: members.iter().map(|a| a.skill.clone()).collect(),
                average_automation_score,
                average_time_horizon,
                trend_direction: TrendDirection::from_score(average_automation_score),
            })
        })
        .collect()
}

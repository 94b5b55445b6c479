//! Skill gap reports between a worker's skills and an occupation's.

use apo_core::types::collections::FxHashSet;
use apo_core::types::occupation::{Skill, SkillCategory};

use super::types::{SkillGap, SkillGapAnalysis};

pub fn analyze_gaps(current: &[Skill], required: &[Skill]) -> SkillGapAnalysis {
    let held: FxHashSet<&str> = current.iter().map(|s| s.id.as_str()).collect();
    let missing: Vec<Skill> = required
        .iter()
        .filter(|s| !held.contains(s.id.as_str()))
        .cloned()
        .collect();

    let categories: Vec<SkillCategory> = SkillCategory::ALL
        .into_iter()
        .filter(|c| current.iter().chain(required).any(|s| s.category == *c))
        .collect();

    let skill_gaps: Vec<SkillGap> = categories
        .iter()
        .map(|category| {
            let have = current.iter().filter(|s| s.category == *category).count();
            let need = required.iter().filter(|s| s.category == *category).count();
            let current_level = have as f64 / need.max(1) as f64;
            let gap = (1.0 - current_level).max(0.0);
            let missing_here: Vec<&Skill> = missing.iter().filter(|s| s.category == *category).collect();

            SkillGap {
                category: category.name().to_string(),
                current_level,
                required_level: 1.0,
                gap,
                recommended_actions: recommendations(category.name(), gap, &missing_here),
            }
        })
        .collect();

    let overall_gap_score = if skill_gaps.is_empty() {
        0.0
    } else {
        skill_gaps.iter().map(|g| g.gap).sum::<f64>() / skill_gaps.len() as f64
    };

    SkillGapAnalysis {
        current_skills: current.to_vec(),
        missing_critical_skills: missing,
        skill_gaps,
        overall_gap_score,
    }
}

fn recommendations(category: &str, gap: f64, missing: &[&Skill]) -> Vec<String> {
    let mut actions = Vec::new();
    if gap > 0.7 {
        actions.push(format!(
            "Prioritize developing {category} skills through formal education or training programs"
        ));
    } else if gap > 0.4 {
        actions.push(format!("Enhance {category} skills through targeted workshops and projects"));
    } else if gap > 0.1 {
        actions.push(format!("Refine {category} skills through continuous learning and practice"));
    }
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|s| s.name.as_str()).collect();
        actions.push(format!("Focus on developing these specific skills: {}", names.join(", ")));
    }
    actions.push(format!("Seek mentorship from experts in {category}"));
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(id: &str, category: SkillCategory) -> Skill {
        Skill::new(id, id.to_uppercase(), category)
    }

    #[test]
    fn test_identical_sets_have_no_gap() {
        let skills = vec![s("a", SkillCategory::Technical), s("b", SkillCategory::Soft)];
        let report = analyze_gaps(&skills, &skills);
        assert!(report.missing_critical_skills.is_empty());
        assert_eq!(report.overall_gap_score, 0.0);
        assert!(report.skill_gaps.iter().all(|g| g.gap == 0.0));
        assert!(report.skill_gaps.iter().all(|g| g.recommended_actions.len() == 1));
    }

    #[test]
    fn test_missing_category() {
        let current = vec![s("a", SkillCategory::Technical)];
        let required = vec![s("a", SkillCategory::Technical), s("c", SkillCategory::Cognitive)];
        let report = analyze_gaps(&current, &required);
        assert_eq!(report.missing_critical_skills.len(), 1);

        let cognitive = report.skill_gaps.iter().find(|g| g.category == "cognitive").unwrap();
        assert_eq!(cognitive.gap, 1.0);
        assert_eq!(
            cognitive.recommended_actions,
            vec![
                "Prioritize developing cognitive skills through formal education or training programs",
                "Focus on developing these specific skills: C",
                "Seek mentorship from experts in cognitive",
            ]
        );
        assert!((report.overall_gap_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_partial_gap_bands() {
        let current = vec![s("a", SkillCategory::Soft)];
        let required = vec![s("a", SkillCategory::Soft), s("b", SkillCategory::Soft)];
        let report = analyze_gaps(&current, &required);
        let gap = &report.skill_gaps[0];
        assert!((gap.gap - 0.5).abs() < 1e-12);
        assert!(gap.recommended_actions[0].starts_with("Enhance soft skills"));
    }

    #[test]
    fn test_no_skills_at_all() {
        let report = analyze_gaps(&[], &[]);
        assert!(report.skill_gaps.is_empty());
        assert_eq!(report.overall_gap_score, 0.0);
    }
}

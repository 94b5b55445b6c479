//! SkillImpactAnalyzer: per-skill automation analysis.

use apo_core::config::SkillsConfig;
use apo_core::types::occupation::Skill;
use apo_core::types::research::AutomationResearchData;
use apo_core::types::semantic::OccupationAnalysis;

use super::alternatives::alternatives_for;
use super::clustering::cluster_by_category;
use super::components::decompose;
use super::development::development_path;
use super::gaps::analyze_gaps;
use super::jitter::{HashJitter, JitterSource};
use super::resilience::resilience;
use super::types::{DetailedSkillAnalysis, SkillCluster, SkillGapAnalysis};

pub struct SkillImpactAnalyzer {
    jitter: Box<dyn JitterSource>,
    amplitude: f64,
}

impl SkillImpactAnalyzer {
    pub fn new(config: &SkillsConfig) -> Self {
        Self::with_jitter(Box::new(HashJitter::new(config.jitter_seed)), config.jitter_amplitude)
    }

    pub fn with_defaults() -> Self {
        Self::new(&SkillsConfig::default())
    }

    pub fn with_jitter(jitter: Box<dyn JitterSource>, amplitude: f64) -> Self {
        Self { jitter, amplitude }
    }

    /// Component-level analysis of each skill, in input order.
    pub fn analyze_skills_granular(
        &self,
        skills: &[Skill],
        analysis: Option<&OccupationAnalysis>,
        research: &AutomationResearchData,
    ) -> Vec<DetailedSkillAnalysis> {
        skills
            .iter()
            .map(|skill| self.analyze_skill(skill, analysis, research))
            .collect()
    }

    fn analyze_skill(
        &self,
        skill: &Skill,
        analysis: Option<&OccupationAnalysis>,
        research: &AutomationResearchData,
    ) -> DetailedSkillAnalysis {
        let center = analysis
            .and_then(|a| a.skill_ranking(&skill.id))
            .map(|r| r.automation_score)
            .filter(|s| s.is_finite())
            .map(|s| s.clamp(0.0, 1.0))
            .unwrap_or_else(|| skill.category.resistance_factor());

        let components = decompose(skill, center, self.amplitude, self.jitter.as_ref());
        let n = components.len().max(1) as f64;
        let overall_score = components.iter().map(|c| c.automation_score).sum::<f64>() / n;
        let confidence_score = components.iter().map(|c| c.confidence_score).sum::<f64>() / n;
        let time_horizon =
            components.iter().map(|c| f64::from(c.time_horizon_years)).sum::<f64>() / n;

        let alternative_skills = alternatives_for(skill.category, overall_score);
        let development_path = development_path(skill, overall_score, &alternative_skills);
        let resilience = resilience(skill, &components, research);

        DetailedSkillAnalysis {
            skill: skill.clone(),
            overall_score,
            confidence_score,
            time_horizon,
            components,
            alternative_skills,
            development_path,
            resilience,
        }
    }

    pub fn cluster_skills(&self, analyses: &[DetailedSkillAnalysis]) -> Vec<SkillCluster> {
        cluster_by_category(analyses)
    }

    pub fn analyze_skill_gaps(&self, current: &[Skill], required: &[Skill]) -> SkillGapAnalysis {
        analyze_gaps(current, required)
    }
}

impl std::fmt::Debug for SkillImpactAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillImpactAnalyzer")
            .field("amplitude", &self.amplitude)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apo_core::types::occupation::SkillCategory;
    use apo_core::types::semantic::SkillAutomationRanking;

    fn skills() -> Vec<Skill> {
        vec![
            Skill::new("s1", "Machine Learning", SkillCategory::Technical),
            Skill::new("s2", "Negotiation", SkillCategory::Soft),
            Skill::new("s3", "Forklift Operation", SkillCategory::Physical),
        ]
    }

    #[test]
    fn test_analysis_bounds() {
        let analyzer = SkillImpactAnalyzer::with_defaults();
        let research = AutomationResearchData::neutral("x");
        let results = analyzer.analyze_skills_granular(&skills(), None, &research);
        assert_eq!(results.len(), 3);
        for r in &results {
            assert!((3..=5).contains(&r.components.len()));
            assert!((0.0..=1.0).contains(&r.overall_score));
            assert!((0.6..=0.9).contains(&r.confidence_score));
            assert!((0.0..=1.0).contains(&r.resilience));
            let expected_alts = if r.overall_score >= 0.5 { 3 } else { 2 };
            assert_eq!(r.alternative_skills.len(), expected_alts);
            let center = r.skill.category.resistance_factor();
            assert!((r.overall_score - center).abs() <= 0.2 + 1e-9);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let research = AutomationResearchData::neutral("x");
        let a = SkillImpactAnalyzer::new(&SkillsConfig {
            jitter_seed: 11,
            ..SkillsConfig::default()
        });
        let b = SkillImpactAnalyzer::new(&SkillsConfig {
            jitter_seed: 11,
            ..SkillsConfig::default()
        });
        assert_eq!(
            a.analyze_skills_granular(&skills(), None, &research),
            b.analyze_skills_granular(&skills(), None, &research)
        );
    }

    #[test]
    fn test_semantic_ranking_recenters() {
        let analyzer = SkillImpactAnalyzer::new(&SkillsConfig {
            jitter_amplitude: 0.0,
            ..SkillsConfig::default()
        });
        let analysis = OccupationAnalysis {
            skill_rankings: vec![SkillAutomationRanking {
                skill_id: "s2".into(),
                skill_name: "Negotiation".into(),
                automation_score: 0.9,
                confidence_score: 0.8,
                time_horizon: 3.0,
            }],
            ..OccupationAnalysis::default()
        };
        let research = AutomationResearchData::neutral("x");
        let results = analyzer.analyze_skills_granular(&skills(), Some(&analysis), &research);
        assert!((results[1].overall_score - 0.9).abs() < 1e-12);
        assert_eq!(results[1].development_path.target_skill.id, "soft-alt-1");
        assert!((results[0].overall_score - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_cluster_and_gap_delegation() {
        let analyzer = SkillImpactAnalyzer::with_defaults();
        let research = AutomationResearchData::neutral("x");
        let results = analyzer.analyze_skills_granular(&skills(), None, &research);
        let clusters = analyzer.cluster_skills(&results);
        assert_eq!(clusters.len(), 3);
        assert_eq!(clusters[0].name, "Technical Skills");

        let gaps = analyzer.analyze_skill_gaps(&skills(), &skills());
        assert_eq!(gaps.overall_gap_score, 0.0);
    }
}

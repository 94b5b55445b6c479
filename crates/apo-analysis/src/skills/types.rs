//! Skill analysis types.

use std::fmt;

use apo_core::types::occupation::Skill;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillComponent {
    pub name: String,
    pub description: String,
    pub automation_score: f64,
    pub confidence_score: f64,
    pub time_horizon_years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub name: String,
    pub description: String,
    pub timeframe: String,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDevelopmentPath {
    pub target_skill: Skill,
    pub milestones: Vec<Milestone>,
    pub estimated_time_to_mastery: String,
    pub complementary_skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedSkillAnalysis {
    pub skill: Skill,
    pub overall_score: f64,
    pub confidence_score: f64,
    /// Mean component horizon in years.
    pub time_horizon: f64,
    pub components: Vec<SkillComponent>,
    pub alternative_skills: Vec<Skill>,
    pub development_path: SkillDevelopmentPath,
    pub resilience: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Stable,
    Decreasing,
}

impl TrendDirection {
    /// ≥ 0.6 increasing, ≤ 0.4 decreasing, otherwise stable.
    pub fn from_score(mean_automation: f64) -> Self {
        if mean_automation >= 0.6 {
            Self::Increasing
        } else if mean_automation <= 0.4 {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Stable => "stable",
            Self::Decreasing => "decreasing",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCluster {
    pub name: String,
    pub description: String,
    pub skills: Vec<Skill>,
    pub average_automation_score: f64,
    pub average_time_horizon: f64,
    pub trend_direction: TrendDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub category: String,
    pub current_level: f64,
    pub required_level: f64,
    pub gap: f64,
    pub recommended_actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapAnalysis {
    pub current_skills: Vec<Skill>,
    pub missing_critical_skills: Vec<Skill>,
    pub skill_gaps: Vec<SkillGap>,
    pub overall_gap_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedSkill {
    pub skill: String,
    /// Influence on the primary skill, in `[-1, 1]`.
    pub impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRelationship {
    pub primary_skill: String,
    pub related_skills: Vec<RelatedSkill>,
}

impl SkillRelationship {
    pub fn new(primary_skill: impl Into<String>) -> Self {
        Self {
            primary_skill: primary_skill.into(),
            related_skills: Vec::new(),
        }
    }

    pub fn with_related(mut self, skill: impl Into<String>, impact: f64) -> Self {
        self.related_skills.push(RelatedSkill {
            skill: skill.into(),
            impact,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipCluster {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub common_occupations: Vec<String>,
    pub growth_trend: f64,
    pub future_relevance: f64,
}

/// Result of checking a relationship set. Impact ranges are enforced as
/// errors; cycles are reported here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipValidation {
    pub has_cycle: bool,
    /// Skills that sit on at least one directed cycle, sorted.
    pub cyclic_skills: Vec<String>,
}

impl RelationshipValidation {
    pub fn is_valid(&self) -> bool {
        !self.has_cycle
    }
}

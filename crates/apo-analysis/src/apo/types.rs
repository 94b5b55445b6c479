//! APO result types.

use std::fmt;

use apo_core::types::occupation::Skill;
use apo_core::types::research::Timeframe;
use serde::{Deserialize, Serialize};

use crate::projection::TimeProjection;
use crate::scenario::FactorBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    SkillDevelopment,
    CareerPivot,
    Education,
    IndustryChange,
}

impl RecommendationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SkillDevelopment => "skill_development",
            Self::CareerPivot => "career_pivot",
            Self::Education => "education",
            Self::IndustryChange => "industry_change",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub timeframe: Timeframe,
    pub impact: ImpactLevel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsImpact {
    pub high_risk: Vec<Skill>,
    pub moderate_risk: Vec<Skill>,
    pub low_risk: Vec<Skill>,
    pub emerging_skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRisk {
    pub id: String,
    pub description: String,
    pub automation_potential: f64,
    pub reason: String,
    pub timeframe: Timeframe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAnalysis {
    pub high_risk_tasks: Vec<TaskRisk>,
    pub moderate_risk_tasks: Vec<TaskRisk>,
    pub low_risk_tasks: Vec<TaskRisk>,
    pub overall_task_automation_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceInfo {
    pub research_data_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_analysis_date: Option<String>,
}

/// Complete APO assessment for one occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApoResult {
    pub occupation_id: String,
    pub occupation_title: String,
    /// Name of the strategy that produced this result.
    pub strategy: String,
    pub overall_score: f64,
    pub confidence: f64,
    pub time_projections: Vec<TimeProjection>,
    pub factor_breakdown: FactorBreakdown,
    pub skills_impact: SkillsImpact,
    pub recommendations: Vec<Recommendation>,
    pub task_analysis: TaskAnalysis,
    pub data_source_info: DataSourceInfo,
}

//! Strategy seam for APO calculators.

use apo_core::types::occupation::{OccupationTask, Skill};
use apo_core::types::research::AutomationResearchData;
use apo_core::types::semantic::OccupationAnalysis;
use apo_core::ApoError;
use serde::{Deserialize, Serialize};

use super::types::ApoResult;

/// Inputs for one occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApoRequest {
    pub occupation_id: String,
    pub occupation_title: String,
    #[serde(default)]
    pub tasks: Vec<OccupationTask>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub research: AutomationResearchData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<OccupationAnalysis>,
    /// Year count for per-year projections; strategies pick their own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_horizon: Option<u32>,
}

impl ApoRequest {
    pub fn new(occupation_id: impl Into<String>, occupation_title: impl Into<String>) -> Self {
        let occupation_id = occupation_id.into();
        Self {
            research: AutomationResearchData::neutral(occupation_id.clone()),
            occupation_id,
            occupation_title: occupation_title.into(),
            tasks: Vec::new(),
            skills: Vec::new(),
            analysis: None,
            time_horizon: None,
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<OccupationTask>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_research(mut self, research: AutomationResearchData) -> Self {
        self.research = research;
        self
    }

    pub fn with_analysis(mut self, analysis: OccupationAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn with_time_horizon(mut self, years: u32) -> Self {
        self.time_horizon = Some(years);
        self
    }
}

/// An APO calculation strategy.
pub trait ApoStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn calculate(&self, request: &ApoRequest) -> Result<ApoResult, ApoError>;
}

//! Semantic analysis output (task and skill automation rankings).

use serde::{Deserialize, Serialize};

use crate::constants::NEUTRAL_SCORE;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskAutomationRanking {
    pub task_id: String,
    pub task_description: String,
    pub automation_score: f64,
    pub confidence_score: f64,
    /// Years until likely automation.
    pub time_horizon: f64,
    pub required_technologies: Vec<String>,
    pub barriers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillAutomationRanking {
    pub skill_id: String,
    pub skill_name: String,
    pub automation_score: f64,
    pub confidence_score: f64,
    pub time_horizon: f64,
}

/// Per-occupation semantic analysis. Optional input; the engine falls back to
/// its own heuristics when it is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OccupationAnalysis {
    pub occupation_id: String,
    pub occupation_title: String,
    pub task_rankings: Vec<TaskAutomationRanking>,
    pub skill_rankings: Vec<SkillAutomationRanking>,
    pub key_automation_drivers: Vec<String>,
    pub key_automation_barriers: Vec<String>,
    pub overall_automation_score: f64,
    pub confidence_score: Option<f64>,
    pub last_updated: String,
}

impl Default for OccupationAnalysis {
    fn default() -> Self {
        Self {
            occupation_id: String::new(),
            occupation_title: String::new(),
            task_rankings: Vec::new(),
            skill_rankings: Vec::new(),
            key_automation_drivers: Vec::new(),
            key_automation_barriers: Vec::new(),
            overall_automation_score: NEUTRAL_SCORE,
            confidence_score: None,
            last_updated: String::new(),
        }
    }
}

impl OccupationAnalysis {
    pub fn task_ranking(&self, task_id: &str) -> Option<&TaskAutomationRanking> {
        self.task_rankings.iter().find(|r| r.task_id == task_id)
    }

    pub fn skill_ranking(&self, skill_id: &str) -> Option<&SkillAutomationRanking> {
        self.skill_rankings.iter().find(|r| r.skill_id == skill_id)
    }
}

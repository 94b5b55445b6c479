//! External data collaborators. Implementations live outside the engine
//! (HTTP fetchers, databases, fixtures); the engine only sees these traits.

use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::types::occupation::{OccupationTask, Skill};
use crate::types::research::AutomationResearchData;
use crate::types::semantic::OccupationAnalysis;

/// Tasks and skills for one occupation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OccupationData {
    pub title: String,
    pub tasks: Vec<OccupationTask>,
    pub skills: Vec<Skill>,
}

pub trait OccupationDataProvider: Send + Sync {
    fn occupation(&self, occupation_id: &str) -> Result<OccupationData, ProviderError>;
}

pub trait ResearchDataProvider: Send + Sync {
    fn research(
        &self,
        occupation_id: &str,
        occupation_title: &str,
    ) -> Result<AutomationResearchData, ProviderError>;
}

pub trait SemanticAnalysisProvider: Send + Sync {
    fn analyze(
        &self,
        occupation_id: &str,
        tasks: &[OccupationTask],
        skills: &[Skill],
    ) -> Result<OccupationAnalysis, ProviderError>;
}

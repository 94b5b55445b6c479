//! Core data types shared across the APO crates.

pub mod collections;
pub mod factors;
pub mod occupation;
pub mod research;
pub mod semantic;

pub use factors::{Factor, FactorAdjustment, FactorScores, FactorWeights};
pub use occupation::{OccupationTask, Skill, SkillCategory};
pub use research::{
    AdoptionCurves, AdoptionPoint, AutomationResearchData, AutomationTrend, HorizonBucket,
    IndustryReport, NewsArticle, RegionalImpact, ResearchConfidence, ResearchPaper, Timeframe,
};
pub use semantic::{OccupationAnalysis, SkillAutomationRanking, TaskAutomationRanking};

//! Full APO results behind a strategy trait: the model-driven dynamic
//! calculator and the keyword/research enhanced calculator.

pub mod dynamic;
pub mod enhanced;
pub mod guidance;
pub mod strategy;
pub mod tasks;
pub mod types;

pub use dynamic::DynamicApoCalculator;
pub use enhanced::EnhancedApoCalculator;
pub use strategy::{ApoRequest, ApoStrategy};
pub use types::{
    ApoResult, DataSourceInfo, ImpactLevel, Recommendation, RecommendationKind, SkillsImpact,
    TaskAnalysis, TaskRisk,
};

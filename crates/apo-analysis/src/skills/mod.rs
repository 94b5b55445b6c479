//! Skill impact analysis: component decomposition, alternatives,
//! development paths, resilience, category clustering, gap reports, and
//! the skill relationship graph.

pub mod alternatives;
pub mod analyzer;
pub mod clustering;
pub mod components;
pub mod development;
pub mod gaps;
pub mod jitter;
pub mod relationships;
pub mod resilience;
pub mod types;

pub use analyzer::SkillImpactAnalyzer;
pub use jitter::{HashJitter, JitterSource};
pub use relationships::SkillGraph;
pub use types::{
    DetailedSkillAnalysis, Milestone, RelatedSkill, RelationshipCluster, RelationshipValidation,
    SkillCluster, SkillComponent, SkillDevelopmentPath, SkillGap, SkillGapAnalysis,
    SkillRelationship, TrendDirection,
};

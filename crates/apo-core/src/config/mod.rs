//! Engine configuration loaded from `apo.toml`.

pub mod apo_config;

pub use apo_config::{ApoConfig, ProjectionConfig, ScenarioConfig, SkillsConfig, WeightsConfig};

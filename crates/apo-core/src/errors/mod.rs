//! Error types for the APO engine.
//!
//! Three classes of failure: invalid input (hard error, rejected before any
//! normalization), degenerate weights (recovered by falling back to base
//! weights), and upstream data gaps (recovered with neutral defaults).

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod provider_error;

pub use config_error::ConfigError;
pub use error_code::{error_codes, ApoErrorCode};
pub use input_error::{FeatureError, ProjectionError, ScenarioError, SkillError, WeightError};
pub use provider_error::ProviderError;

/// Umbrella error returned from engine entry points.
#[derive(Debug, thiserror::Error)]
pub enum ApoError {
    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Weight(#[from] WeightError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Skill(#[from] SkillError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApoErrorCode for ApoError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Feature(e) => e.error_code(),
            Self::Weight(e) => e.error_code(),
            Self::Scenario(e) => e.error_code(),
            Self::Projection(e) => e.error_code(),
            Self::Skill(e) => e.error_code(),
            Self::Provider(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

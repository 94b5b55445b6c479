//! Input validation errors.

use crate::types::factors::Factor;

use super::error_code::{error_codes, ApoErrorCode};

/// Structurally invalid feature vectors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    #[error("feature array for {factor} is empty")]
    EmptyArray { factor: Factor },

    #[error("feature {factor}[{index}] is not finite")]
    NonFinite { factor: Factor, index: usize },

    #[error("feature {factor}[{index}] = {value} is outside [0, 1]")]
    OutOfRange {
        factor: Factor,
        index: usize,
        value: f64,
    },
}

impl ApoErrorCode for FeatureError {
    fn error_code(&self) -> &'static str {
        error_codes::INVALID_INPUT
    }
}

/// Factor weight errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("weight for {factor} is negative ({value})")]
    Negative { factor: Factor, value: f64 },

    #[error("weight for {factor} is not finite")]
    NonFinite { factor: Factor },

    #[error("weights sum to {sum}, expected 1.0")]
    NotNormalized { sum: f64 },

    #[error("all factor importances are zero")]
    Degenerate,

    #[error("observed score {value} is outside [0, 1]")]
    ScoreOutOfRange { value: f64 },
}

impl ApoErrorCode for WeightError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Degenerate => error_codes::DEGENERATE_WEIGHTS,
            _ => error_codes::INVALID_INPUT,
        }
    }
}

/// Scenario parameter errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario '{scenario}': multiplier for {factor} must be finite and non-negative, got {value}")]
    InvalidMultiplier {
        scenario: String,
        factor: Factor,
        value: f64,
    },

    #[error("scenario '{scenario}': horizon of {years} years exceeds the maximum of {max}")]
    InvalidHorizon {
        scenario: String,
        years: u32,
        max: u32,
    },
}

impl ApoErrorCode for ScenarioError {
    fn error_code(&self) -> &'static str {
        error_codes::INVALID_INPUT
    }
}

/// Projection horizon errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("horizon of {years} years exceeds the maximum of {max}")]
    HorizonOutOfRange { years: u32, max: u32 },
}

impl ApoErrorCode for ProjectionError {
    fn error_code(&self) -> &'static str {
        error_codes::INVALID_INPUT
    }
}

/// Skill relationship errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillError {
    #[error("impact {impact} from '{primary}' to '{related}' is outside [-1, 1]")]
    ImpactOutOfRange {
        primary: String,
        related: String,
        impact: f64,
    },
}

impl ApoErrorCode for SkillError {
    fn error_code(&self) -> &'static str {
        error_codes::INVALID_INPUT
    }
}

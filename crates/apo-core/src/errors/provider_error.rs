//! Errors surfaced by external data providers.

use super::error_code::{error_codes, ApoErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("occupation '{occupation_id}' unavailable: {reason}")]
    OccupationUnavailable {
        occupation_id: String,
        reason: String,
    },

    #[error("research data for '{occupation_id}' unavailable: {reason}")]
    ResearchUnavailable {
        occupation_id: String,
        reason: String,
    },

    #[error("semantic analysis for '{occupation_id}' unavailable: {reason}")]
    AnalysisUnavailable {
        occupation_id: String,
        reason: String,
    },
}

impl ApoErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OccupationUnavailable { .. } => error_codes::PROVIDER_ERROR,
            Self::ResearchUnavailable { .. } | Self::AnalysisUnavailable { .. } => {
                error_codes::UPSTREAM_DATA_GAP
            }
        }
    }
}

//! # apo-core
//!
//! Foundation crate for the APO (Automation Potential Overview) scoring engine.
//! Provides occupation/research/factor types, the weight store and provider
//! traits, errors, configuration, tracing setup, and shared constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::ApoConfig;
pub use errors::{ApoError, ApoErrorCode};
pub use traits::WeightStore;
pub use types::factors::{Factor, FactorAdjustment, FactorScores, FactorWeights};

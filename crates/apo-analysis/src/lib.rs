//! # apo-analysis
//!
//! Scoring engine for the APO (Automation Potential Overview).
//! Contains feature extraction, adaptive factor weighting, prediction,
//! time projections, scenario modeling, skill impact analysis, the two
//! APO calculation strategies, and the `ApoEngine` facade.

#![allow(clippy::module_inception)]

pub mod apo;
pub mod engine;
pub mod features;
pub mod prediction;
pub mod projection;
pub mod scenario;
pub mod skills;
pub mod weighting;

pub use engine::ApoEngine;

//! Predictor: extract → adjust weights → predict.

pub mod predictor;

pub use predictor::{PredictionOutcome, Predictor};

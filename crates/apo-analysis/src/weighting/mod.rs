//! Adaptive factor weighting: occupation-specific weights derived from the
//! feature vector, cached in a `WeightStore`, nudged online by observed scores.

pub mod adaptive;
pub mod statistics;
pub mod store;
pub mod types;

pub use adaptive::AdaptiveWeighting;
pub use store::InMemoryWeightStore;
pub use types::ModelPrediction;

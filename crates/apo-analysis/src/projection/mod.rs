//! Time projections: adoption-curve trajectories and S-curve growth.

pub mod drivers;
pub mod generator;
pub mod s_curve;
pub mod types;

pub use generator::ProjectionGenerator;
pub use s_curve::SCurve;
pub use types::{ProjectionSeed, TimeProjection};

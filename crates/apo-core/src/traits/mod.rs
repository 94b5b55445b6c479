//! Shared traits used across APO crates.

pub mod providers;
pub mod weight_store;

pub use providers::{
    OccupationData, OccupationDataProvider, ResearchDataProvider, SemanticAnalysisProvider,
};
pub use weight_store::WeightStore;

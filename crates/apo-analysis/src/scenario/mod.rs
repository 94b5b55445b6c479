//! What-if scenario modeling over fixed baseline weights.

pub mod blend;
pub mod modeler;
pub mod types;

pub use blend::ScenarioBlend;
pub use modeler::ScenarioModeler;
pub use types::{FactorBreakdown, FactorMultipliers, RegionalBreakdown, ScenarioParams, ScenarioResult};

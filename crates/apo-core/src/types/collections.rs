//! Hash collections used throughout the engine.

pub use rustc_hash::{FxHashMap, FxHashSet};

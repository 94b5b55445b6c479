//! Feature extraction: tasks, skills, research signals, and optional
//! semantic analysis into a fixed-shape `OccupationFeatureVector`.

pub mod extractor;
pub mod keywords;
pub mod research;
pub mod types;

pub use extractor::FeatureExtractor;
pub use research::{AdoptionRate, ResearchSignals, Sentiment, TechMention};
pub use types::{FeatureArray, OccupationFeatureVector};

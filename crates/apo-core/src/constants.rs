//! Shared constants for the APO engine.

/// Number of values in each named feature array.
pub const FEATURE_DIM: usize = 5;

/// Neutral score used whenever source data is absent.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Tolerance for the factor-weight sum-to-one invariant.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Default learning rate for online weight nudges.
pub const DEFAULT_LEARNING_RATE: f64 = 0.05;

/// Horizons (years ahead) projected when the caller does not specify any.
pub const DEFAULT_HORIZONS: [u32; 3] = [2, 5, 10];

/// Furthest horizon (years ahead) a caller may request.
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Confidence lost per projected year.
pub const CONFIDENCE_DECAY_PER_YEAR: f64 = 0.05;

/// Multiplier applied to the base score to obtain the horizon ceiling.
pub const MAX_SCORE_MULTIPLIER: f64 = 1.5;

/// A factor whose weight exceeds this is reported as a key driver.
pub const KEY_DRIVER_WEIGHT_THRESHOLD: f64 = 0.3;

/// Maximum number of key drivers per projection.
pub const MAX_KEY_DRIVERS: usize = 5;

/// Minimum relationship impact for two skills to share a cluster.
pub const CLUSTER_IMPACT_THRESHOLD: f64 = 0.6;

/// Discount applied to indirect (two-hop) skill impacts.
pub const INDIRECT_IMPACT_DISCOUNT: f64 = 0.7;

/// Research older than this many years carries no recency weight.
pub const RESEARCH_RECENCY_WINDOW_YEARS: f64 = 10.0;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "APO_LOG";

/// Configuration file looked up by `ApoConfig::load`.
pub const CONFIG_FILE_NAME: &str = "apo.toml";

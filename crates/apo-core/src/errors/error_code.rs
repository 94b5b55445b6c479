//! Stable error codes exposed to callers.

/// Error code string constants.
pub mod error_codes {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const DEGENERATE_WEIGHTS: &str = "DEGENERATE_WEIGHTS";
    pub const UPSTREAM_DATA_GAP: &str = "UPSTREAM_DATA_GAP";
    pub const PROVIDER_ERROR: &str = "PROVIDER_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Every engine error maps to one stable code.
pub trait ApoErrorCode {
    fn error_code(&self) -> &'static str;
}

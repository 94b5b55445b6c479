//! Installs a `fmt` subscriber filtered by the `APO_LOG` environment variable.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "apo_core=info,apo_analysis=info";

/// Initialize the global subscriber. Safe to call more than once; only the
/// first call installs anything, and an already-installed global subscriber
/// is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    });
}

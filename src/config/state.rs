// Application state module
// Runtime state shared across connections

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,

    // Cached config value for fast access without locks
    pub cached_access_log: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            cached_access_log: Arc::new(AtomicBool::new(config.logging.access_log)),
        }
    }
}

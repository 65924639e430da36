use std::sync::Arc;
use std::time::Instant;

use rss_core::SignalStore;

use crate::config::ServerConfig;

/// Main server state shared across all handlers.
///
/// The store is loaded once at startup and never mutated, so handlers can
/// read it concurrently without any locking.
pub struct ServerState {
    pub config: ServerConfig,
    pub store: Arc<SignalStore>,
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(config: ServerConfig, store: Arc<SignalStore>) -> Self {
        Self {
            config,
            store,
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

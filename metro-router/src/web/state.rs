//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;

/// Shared application state.
///
/// The network is built once at startup and only ever read afterwards,
/// so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub network: Arc<Network>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}

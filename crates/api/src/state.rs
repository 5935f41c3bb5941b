use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::MissionService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Mission operations, bound to the configured store.
    pub missions: Arc<MissionService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

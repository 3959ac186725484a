use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::EmployeeStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and passed explicitly; cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Persistence for employer rosters.
    pub store: Arc<dyn EmployeeStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone. The service keeps no mutable state of its own; the store
/// handle is opened once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle.
    pub store: folio_db::SharedStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

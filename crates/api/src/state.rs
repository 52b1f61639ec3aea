use std::sync::Arc;

use paddock_db::{DbPool, Store};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Document store the handlers read and write.
    pub store: Store,
    /// Present when the store is database-backed; probed by the health check.
    pub pool: Option<DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

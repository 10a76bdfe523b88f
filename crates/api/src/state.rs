use std::sync::Arc;

use crate::config::ServerConfig;
use crate::roller::Roller;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: acolyte_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Random source for home world rolls.
    pub roller: Arc<Roller>,
}

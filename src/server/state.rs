//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for users and sessions
//! - World Bank client wrapping the pooled HTTP client

use sea_orm::DatabaseConnection;

use crate::server::worldbank::WorldBankClient;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool and
/// `WorldBankClient` wraps a `reqwest::Client`, which uses an `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for the World Bank indicator API.
    pub worldbank: WorldBankClient,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `worldbank` - Client for the World Bank API
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, worldbank: WorldBankClient) -> Self {
        Self { db, worldbank }
    }
}

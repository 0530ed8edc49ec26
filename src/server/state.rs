//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources for request handlers.
///
/// Cloned for every request through Axum's state extraction; the database connection
/// is a pool, so clones share it.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

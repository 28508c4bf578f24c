//! Shared state for the HTTP handlers.

use std::sync::{Arc, Mutex};

use super::error::{ApiError, ApiResult};
use crate::services::database::Database;

/// Handler state: one SQLite connection behind a mutex.
#[derive(Clone)]
pub struct ApiState {
    database: Arc<Mutex<Database>>,
}

impl ApiState {
    pub fn new(database: Database) -> Self {
        Self {
            database: Arc::new(Mutex::new(database)),
        }
    }

    /// Run a synchronous store operation while holding the connection.
    pub fn with_database<T, F>(&self, operation: F) -> ApiResult<T>
    where
        F: FnOnce(&Database) -> ApiResult<T>,
    {
        let guard = self
            .database
            .lock()
            .map_err(|_| ApiError::internal("Database lock poisoned"))?;
        operation(&guard)
    }
}

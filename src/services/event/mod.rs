//! Timeline event row service.
//! Database-backed CRUD for the `table_data` table, split into write
//! operations (`crud`) and listing (`queries`).

use rusqlite::Connection;

pub mod crud;
pub mod queries;
mod shared;

/// Service for managing event rows stored in SQLite.
pub struct EventRowService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> EventRowService<'a> {
    /// Create a new EventRowService with a database connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

//! Column definition service.
//! Lists the fixed table structure and manages user-defined columns.

use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, Row};

use crate::models::column::{is_default_column, ColumnDefinition, CustomColumn};

pub struct ColumnService<'a> {
    conn: &'a Connection,
}

impl<'a> ColumnService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// The fixed structure columns, ordered by `column_order`.
    pub fn list_structure(&self) -> Result<Vec<ColumnDefinition>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT name, column_order, data_type
                 FROM table_columns
                 ORDER BY column_order",
            )
            .context("Failed to prepare structure query")?;

        let rows = stmt.query_map([], |row| {
            Ok(ColumnDefinition {
                name: row.get(0)?,
                column_order: row.get(1)?,
                data_type: row.get(2)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>()
            .context("Failed to load table structure")
    }

    /// Custom columns in display order.
    pub fn list_custom(&self) -> Result<Vec<CustomColumn>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, column_name, column_order
                 FROM custom_columns
                 ORDER BY column_order",
            )
            .context("Failed to prepare custom column query")?;

        let rows = stmt.query_map([], Self::row_to_column)?;
        rows.collect::<Result<Vec<_>, _>>()
            .context("Failed to load custom columns")
    }

    /// Append a custom column after the current last one.
    pub fn create_custom(&self, name: &str) -> Result<CustomColumn> {
        let name = name.trim();
        if name.is_empty() {
            return Err(anyhow!("Column name cannot be empty"));
        }
        if is_default_column(name) {
            return Err(anyhow!("Column {} is a built-in column", name));
        }

        let max_order: i64 = self
            .conn
            .query_row(
                "SELECT COALESCE(MAX(column_order), 0) FROM custom_columns",
                [],
                |row| row.get(0),
            )
            .context("Failed to read highest column order")?;
        let column_order = max_order + 1;

        self.conn
            .execute(
                "INSERT INTO custom_columns (column_name, column_order) VALUES (?1, ?2)",
                params![name, column_order],
            )
            .with_context(|| format!("Failed to insert custom column {}", name))?;

        Ok(CustomColumn {
            id: Some(self.conn.last_insert_rowid()),
            column_name: name.to_string(),
            column_order,
        })
    }

    /// Delete a custom column by name. Returns how many definitions were
    /// removed (0 when the column does not exist).
    ///
    /// Values already stored under this key in rows' custom fields are kept.
    pub fn delete_custom(&self, name: &str) -> Result<usize> {
        self.conn
            .execute("DELETE FROM custom_columns WHERE column_name = ?1", [name])
            .with_context(|| format!("Failed to delete custom column {}", name))
    }

    fn row_to_column(row: &Row<'_>) -> rusqlite::Result<CustomColumn> {
        Ok(CustomColumn {
            id: Some(row.get(0)?),
            column_name: row.get(1)?,
            column_order: row.get(2)?,
        })
    }
}

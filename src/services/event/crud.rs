use super::queries::{map_event_row, SELECT_COLUMNS};
use super::shared::{format_optional_timestamp, format_timestamp, serialize_custom_fields};
use super::EventRowService;
use crate::models::event::{EventRow, NewEventRow, RowUpdate};
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use rusqlite::{self, params, OptionalExtension};

impl<'a> EventRowService<'a> {
    /// Insert a new row and return it as stored.
    pub fn create(&self, row: &NewEventRow) -> Result<EventRow> {
        let now = format_timestamp(&Utc::now());
        let custom_fields = serialize_custom_fields(&row.custom_fields());

        self.conn
            .execute(
                "INSERT INTO table_data (
                    start_datetime, end_datetime, title, description, custom_fields,
                    created_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    format_optional_timestamp(row.start_datetime.as_ref()),
                    format_optional_timestamp(row.end_datetime.as_ref()),
                    row.title,
                    row.description,
                    custom_fields,
                    &now,
                    &now,
                ],
            )
            .context("Failed to insert row")?;

        let id = self.conn.last_insert_rowid();
        self.get(id)?
            .ok_or_else(|| anyhow!("Row {} vanished right after insert", id))
    }

    /// Retrieve a row by ID.
    pub fn get(&self, id: i64) -> Result<Option<EventRow>> {
        let sql = format!("SELECT {} FROM table_data WHERE id = ?1", SELECT_COLUMNS);
        self.conn
            .query_row(&sql, [id], map_event_row)
            .optional()
            .context("Failed to load row")
    }

    /// Apply an update and return the stored row, or `None` when the row does
    /// not exist.
    ///
    /// Fixed fields set to `None` keep their stored value; `custom_fields`
    /// always replaces the stored map.
    pub fn update(&self, id: i64, update: &RowUpdate) -> Result<Option<EventRow>> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE table_data SET
                    start_datetime = COALESCE(?1, start_datetime),
                    end_datetime = COALESCE(?2, end_datetime),
                    title = COALESCE(?3, title),
                    description = COALESCE(?4, description),
                    custom_fields = ?5,
                    updated_at = ?6
                 WHERE id = ?7",
                params![
                    format_optional_timestamp(update.start_datetime.as_ref()),
                    format_optional_timestamp(update.end_datetime.as_ref()),
                    update.title,
                    update.description,
                    serialize_custom_fields(&update.custom_fields),
                    format_timestamp(&Utc::now()),
                    id,
                ],
            )
            .context("Failed to update row")?;

        if rows_affected == 0 {
            return Ok(None);
        }

        self.get(id)
    }

    /// Delete a row by ID. Returns whether a row was removed.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM table_data WHERE id = ?1", [id])
            .context("Failed to delete row")?;

        Ok(rows_affected > 0)
    }
}

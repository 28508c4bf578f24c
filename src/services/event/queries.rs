use super::shared::{deserialize_custom_fields, parse_timestamp};
use super::EventRowService;
use crate::models::event::EventRow;
use anyhow::{Context, Result};
use rusqlite::{self, Row};

pub(crate) const SELECT_COLUMNS: &str =
    "id, start_datetime, end_datetime, title, description, custom_fields";

impl<'a> EventRowService<'a> {
    /// List every row ordered by start time, undated rows last.
    pub fn list_all(&self) -> Result<Vec<EventRow>> {
        let sql = format!(
            "SELECT {} FROM table_data
             ORDER BY start_datetime IS NULL, start_datetime ASC, id ASC",
            SELECT_COLUMNS
        );
        let mut stmt = self
            .conn
            .prepare(&sql)
            .context("Failed to prepare row list query")?;

        let rows = stmt
            .query_map([], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to load rows")?;

        Ok(rows)
    }
}

pub(crate) fn map_event_row(row: &Row<'_>) -> Result<EventRow, rusqlite::Error> {
    Ok(EventRow {
        id: row.get(0)?,
        start_datetime: parse_timestamp(row.get(1)?)?,
        end_datetime: parse_timestamp(row.get(2)?)?,
        title: row.get(3)?,
        description: row.get(4)?,
        custom_fields: deserialize_custom_fields(row.get(5)?)?,
    })
}

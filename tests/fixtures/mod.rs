// Test fixtures - reusable test data and an in-process table API
#![allow(dead_code)]

use std::cell::Cell;

use chrono::{DateTime, Duration, TimeZone, Utc};
use timeline_table::models::column::{ColumnDefinition, ColumnDeleted, CustomColumn};
use timeline_table::models::event::{EventRow, NewEventRow, RowUpdate};
use timeline_table::services::client::{ApiClientError, ApiClientResult, TableApi};
use timeline_table::services::column::ColumnService;
use timeline_table::services::database::Database;
use timeline_table::services::event::EventRowService;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Jan 1, 2025 at 09:00 UTC
    pub fn jan_1_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()
    }

    pub fn days_after_jan_1(days: i64) -> DateTime<Utc> {
        jan_1_2025() + Duration::days(days)
    }
}

/// Sample rows for testing
pub mod rows {
    use super::*;

    pub fn kickoff() -> NewEventRow {
        NewEventRow {
            start_datetime: Some(dates::jan_1_2025()),
            end_datetime: Some(dates::days_after_jan_1(1)),
            title: "Kickoff".to_string(),
            description: "Project start".to_string(),
            ..NewEventRow::default()
        }
        .with_custom_field("owner", "dana")
    }

    pub fn review() -> NewEventRow {
        NewEventRow {
            start_datetime: Some(dates::days_after_jan_1(10)),
            end_datetime: None,
            title: "Review".to_string(),
            ..NewEventRow::default()
        }
    }
}

pub fn memory_database() -> Database {
    let db = Database::new(":memory:").expect("open in-memory database");
    db.initialize_schema().expect("initialize schema");
    db
}

/// `TableApi` backed directly by the store services, counting the requests
/// the manager makes.
pub struct StoreTableApi {
    db: Database,
    pub updates: Cell<usize>,
    pub column_deletes: Cell<usize>,
    /// Row ids whose delete or update should fail
    pub failing_rows: Vec<i64>,
}

impl StoreTableApi {
    pub fn new() -> Self {
        Self {
            db: memory_database(),
            updates: Cell::new(0),
            column_deletes: Cell::new(0),
            failing_rows: Vec::new(),
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn seed_row(&self, row: &NewEventRow) -> EventRow {
        EventRowService::new(self.db.connection())
            .create(row)
            .expect("seed row")
    }

    pub fn seed_column(&self, name: &str) -> CustomColumn {
        ColumnService::new(self.db.connection())
            .create_custom(name)
            .expect("seed column")
    }

    fn store_error(err: anyhow::Error) -> ApiClientError {
        ApiClientError::Status {
            status: 500,
            message: format!("{:#}", err),
        }
    }

    fn fail_if_requested(&self, id: i64) -> ApiClientResult<()> {
        if self.failing_rows.contains(&id) {
            return Err(ApiClientError::Status {
                status: 500,
                message: format!("Simulated failure for row {}", id),
            });
        }
        Ok(())
    }
}

impl TableApi for StoreTableApi {
    fn fetch_structure(&self) -> ApiClientResult<Vec<ColumnDefinition>> {
        ColumnService::new(self.db.connection())
            .list_structure()
            .map_err(Self::store_error)
    }

    fn list_rows(&self) -> ApiClientResult<Vec<EventRow>> {
        EventRowService::new(self.db.connection())
            .list_all()
            .map_err(Self::store_error)
    }

    fn create_row(&self, row: &NewEventRow) -> ApiClientResult<EventRow> {
        EventRowService::new(self.db.connection())
            .create(row)
            .map_err(Self::store_error)
    }

    fn update_row(&self, id: i64, update: &RowUpdate) -> ApiClientResult<EventRow> {
        self.updates.set(self.updates.get() + 1);
        self.fail_if_requested(id)?;
        EventRowService::new(self.db.connection())
            .update(id, update)
            .map_err(Self::store_error)?
            .ok_or_else(|| ApiClientError::Status {
                status: 404,
                message: format!("Row {} not found", id),
            })
    }

    fn delete_row(&self, id: i64) -> ApiClientResult<()> {
        self.fail_if_requested(id)?;
        EventRowService::new(self.db.connection())
            .delete(id)
            .map(|_| ())
            .map_err(Self::store_error)
    }

    fn list_columns(&self) -> ApiClientResult<Vec<CustomColumn>> {
        ColumnService::new(self.db.connection())
            .list_custom()
            .map_err(Self::store_error)
    }

    fn create_column(&self, name: &str) -> ApiClientResult<CustomColumn> {
        ColumnService::new(self.db.connection())
            .create_custom(name)
            .map_err(Self::store_error)
    }

    fn delete_column(&self, name: &str) -> ApiClientResult<ColumnDeleted> {
        self.column_deletes.set(self.column_deletes.get() + 1);
        let rows_deleted = ColumnService::new(self.db.connection())
            .delete_custom(name)
            .map_err(Self::store_error)?;
        if rows_deleted == 0 {
            return Err(ApiClientError::Status {
                status: 404,
                message: "Column not found in database".to_string(),
            });
        }
        Ok(ColumnDeleted {
            success: true,
            rows_deleted,
        })
    }
}

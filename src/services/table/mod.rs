// Table service
// Client-side state for the event table: rows, columns, selection,
// debounced write-back and the derived timeline.

mod columns;
mod error;
mod grid;
mod rows;
mod selection;
mod sync;

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::models::column::ColumnSet;
use crate::models::event::EventRow;
use crate::models::settings::ClientSettings;
use crate::services::client::TableApi;
use crate::services::export::{export_rows, CsvExport};
use crate::services::timeline::TimelineLayout;
use crate::utils::color::ItemColor;

pub use error::{CellEditError, TableError};
pub use grid::{CellInput, CellKey, GridColumn, GridRow, GridView};
pub use rows::DeleteReport;
pub use sync::{PendingWrite, SyncState};

/// Everything the client knows about the table.
#[derive(Debug, Default)]
pub struct TableState {
    columns: ColumnSet,
    rows: Vec<EventRow>,
    selection: BTreeSet<i64>,
    colors: HashMap<i64, ItemColor>,
    sync: HashMap<i64, SyncState>,
    pending: HashMap<i64, PendingWrite>,
    structure_revision: u64,
    timeline_revision: u64,
}

/// Counts for the status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSummary {
    pub rows: usize,
    pub selected: usize,
    pub pending: usize,
    pub unsynced: usize,
}

#[derive(Debug)]
struct TimelineCache {
    revision: u64,
    viewport_width: f32,
    layout: TimelineLayout,
}

/// Owns the table state and routes every mutation through the API.
pub struct TableManager<A: TableApi> {
    api: A,
    state: TableState,
    debounce: Duration,
    timeline_cache: Option<TimelineCache>,
}

impl<A: TableApi> TableManager<A> {
    pub fn new(api: A, debounce: Duration) -> Self {
        Self {
            api,
            state: TableState::default(),
            debounce,
            timeline_cache: None,
        }
    }

    pub fn from_settings(api: A, settings: &ClientSettings) -> Self {
        Self::new(api, Duration::from_millis(settings.debounce_ms))
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.state.columns
    }

    pub fn rows(&self) -> &[EventRow] {
        &self.state.rows
    }

    pub fn row(&self, id: i64) -> Option<&EventRow> {
        self.state.rows.iter().find(|row| row.id == id)
    }

    /// Bumped by every change that needs the grid rebuilt (load, row or
    /// column add/delete). Cell value edits leave it alone.
    pub fn structure_revision(&self) -> u64 {
        self.state.structure_revision
    }

    /// Bumped whenever the timeline has to be derived again.
    pub fn timeline_revision(&self) -> u64 {
        self.state.timeline_revision
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            rows: self.state.rows.len(),
            selected: self.state.selection.len(),
            pending: self.state.pending.len(),
            unsynced: self
                .state
                .sync
                .values()
                .filter(|state| matches!(state, SyncState::Unsynced { .. }))
                .count(),
        }
    }

    /// Load column definitions, then rows.
    pub fn initialize(&mut self) -> Result<(), TableError> {
        self.load_definitions()?;
        self.load_rows()
    }

    /// Fetch custom columns and append them after the defaults.
    pub fn load_definitions(&mut self) -> Result<(), TableError> {
        let mut custom = self.api.list_columns().map_err(|err| {
            log::error!("Failed to load column definitions: {}", err);
            err
        })?;
        custom.sort_by_key(|column| column.column_order);

        self.state
            .columns
            .set_custom(custom.into_iter().map(|column| column.column_name).collect());
        self.mark_structure_changed();
        log::debug!(
            "Loaded {} custom column(s)",
            self.state.columns.custom().len()
        );
        Ok(())
    }

    /// Replace the local rows with the server's. Unsynced markers are
    /// dropped; rows with a write still queued stay pending.
    pub fn load_rows(&mut self) -> Result<(), TableError> {
        let rows = self.api.list_rows().map_err(|err| {
            log::error!("Failed to load rows: {}", err);
            err
        })?;

        self.state.rows = rows;
        let ids: BTreeSet<i64> = self.state.rows.iter().map(|row| row.id).collect();

        self.state.selection.retain(|id| ids.contains(id));
        self.state.pending.retain(|id, _| ids.contains(id));
        self.state.colors.retain(|id, _| ids.contains(id));
        let pending: Vec<i64> = self.state.pending.keys().copied().collect();
        self.state.sync.clear();
        for id in pending {
            self.state.sync.insert(id, SyncState::Pending);
        }

        self.mark_structure_changed();
        self.invalidate_timeline();
        log::debug!("Loaded {} row(s)", self.state.rows.len());
        Ok(())
    }

    /// Write back anything pending, then fetch everything again.
    pub fn reload(&mut self) -> Result<(), TableError> {
        self.flush_all();
        self.initialize()
    }

    /// Render the selected rows as CSV.
    pub fn export_selected(&self, now: DateTime<Utc>) -> Result<CsvExport, TableError> {
        if self.state.selection.is_empty() {
            return Err(TableError::NothingSelected);
        }

        export_rows(&self.state.columns, self.selected_rows(), now).map_err(TableError::Export)
    }

    fn mark_structure_changed(&mut self) {
        self.state.structure_revision += 1;
    }

    fn invalidate_timeline(&mut self) {
        self.state.timeline_revision += 1;
        self.timeline_cache = None;
    }

    fn row_mut(&mut self, id: i64) -> Option<&mut EventRow> {
        self.state.rows.iter_mut().find(|row| row.id == id)
    }

    fn color_for(&mut self, id: i64) -> ItemColor {
        *self
            .state
            .colors
            .entry(id)
            .or_insert_with(|| ItemColor::for_id(id))
    }
}

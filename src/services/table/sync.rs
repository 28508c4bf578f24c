use std::time::{Duration, Instant};

use chrono::Local;

use super::{CellEditError, TableManager};
use crate::models::column::ColumnKind;
use crate::models::event::{EventRow, RowUpdate};
use crate::services::client::TableApi;
use crate::utils::date::parse_input;

/// The next write queued for a row: a snapshot of the whole row and the
/// instant it becomes due.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingWrite {
    pub payload: RowUpdate,
    pub due_at: Instant,
}

/// Write-back status of a row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Synced,
    Pending,
    /// The last write failed; the local edit is kept.
    Unsynced { error: String },
}

impl<A: TableApi> TableManager<A> {
    /// Apply a cell edit locally and queue the row for write-back.
    ///
    /// Datetime cells take `YYYY-MM-DDTHH:MM` in local time. A queued write
    /// for the same row is replaced and its deadline pushed back.
    pub fn update_cell(
        &mut self,
        row_id: i64,
        column: &str,
        value: &str,
        now: Instant,
    ) -> Result<(), CellEditError> {
        let kind = self
            .state
            .columns
            .kind_of(column)
            .ok_or_else(|| CellEditError::UnknownColumn(column.to_string()))?;

        let row = self
            .row_mut(row_id)
            .ok_or(CellEditError::UnknownRow(row_id))?;

        apply_cell_value(row, kind, column, value)?;
        let payload = RowUpdate::from(&*row);

        self.state.pending.insert(
            row_id,
            PendingWrite {
                payload,
                due_at: now + self.debounce,
            },
        );
        self.state.sync.insert(row_id, SyncState::Pending);

        if self.is_selected(row_id) {
            self.invalidate_timeline();
        }
        Ok(())
    }

    /// Send every write whose deadline has passed. Returns how many were sent.
    pub fn flush_due(&mut self, now: Instant) -> usize {
        let mut due: Vec<(i64, Instant)> = self
            .state
            .pending
            .iter()
            .filter(|(_, write)| write.due_at <= now)
            .map(|(id, write)| (*id, write.due_at))
            .collect();
        due.sort_by_key(|(id, due_at)| (*due_at, *id));

        for (id, _) in &due {
            if let Some(write) = self.state.pending.remove(id) {
                self.send_write(*id, write.payload);
            }
        }
        due.len()
    }

    /// Send every queued write regardless of deadline.
    pub fn flush_all(&mut self) -> usize {
        let mut ids: Vec<i64> = self.state.pending.keys().copied().collect();
        ids.sort_unstable();

        for id in &ids {
            if let Some(write) = self.state.pending.remove(id) {
                self.send_write(*id, write.payload);
            }
        }
        ids.len()
    }

    /// Time until the earliest queued write is due; zero when one is overdue.
    pub fn next_flush_in(&self, now: Instant) -> Option<Duration> {
        self.state
            .pending
            .values()
            .map(|write| write.due_at.saturating_duration_since(now))
            .min()
    }

    pub fn pending_write(&self, row_id: i64) -> Option<&PendingWrite> {
        self.state.pending.get(&row_id)
    }

    pub fn sync_state(&self, row_id: i64) -> SyncState {
        self.state.sync.get(&row_id).cloned().unwrap_or_default()
    }

    fn send_write(&mut self, id: i64, payload: RowUpdate) {
        match self.api.update_row(id, &payload) {
            Ok(server_row) => {
                if let Some(row) = self.row_mut(id) {
                    row.merge_server_echo(server_row);
                }
                self.state.sync.remove(&id);
                if self.is_selected(id) {
                    self.invalidate_timeline();
                }
                log::debug!("Saved row {}", id);
            }
            Err(err) => {
                log::warn!("Failed to save row {}: {}", id, err);
                self.state.sync.insert(
                    id,
                    SyncState::Unsynced {
                        error: err.to_string(),
                    },
                );
            }
        }
    }
}

fn apply_cell_value(
    row: &mut EventRow,
    kind: ColumnKind,
    column: &str,
    value: &str,
) -> Result<(), CellEditError> {
    match kind {
        ColumnKind::Select => return Err(CellEditError::NotEditable),
        ColumnKind::DateTime => {
            let parsed = parse_input(value, &Local)
                .ok_or_else(|| CellEditError::InvalidDateTime(value.to_string()))?;
            if column == "start_datetime" {
                row.start_datetime = Some(parsed);
            } else {
                row.end_datetime = Some(parsed);
            }
        }
        ColumnKind::Text => {
            if column == "title" {
                row.title = value.to_string();
            } else {
                row.description = value.to_string();
            }
        }
        ColumnKind::Custom => {
            row.custom_fields
                .insert(column.to_string(), value.to_string());
        }
    }
    Ok(())
}

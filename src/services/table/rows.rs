use chrono::{DateTime, Utc};

use super::{TableError, TableManager};
use crate::models::event::NewEventRow;
use crate::services::client::TableApi;

/// Outcome of a batch row delete. Failed rows stay in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: Vec<i64>,
    pub failed: Vec<(i64, String)>,
}

impl DeleteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl<A: TableApi> TableManager<A> {
    /// Create a blank row starting and ending at `now`. The row only appears
    /// once the server has assigned it an id.
    pub fn add_row(&mut self, now: DateTime<Utc>) -> Result<i64, TableError> {
        let created = self
            .api
            .create_row(&NewEventRow::blank_at(now))
            .map_err(|err| {
                log::error!("Failed to add row: {}", err);
                err
            })?;

        let id = created.id;
        log::info!("Added row {}", id);
        self.state.rows.push(created);
        self.color_for(id);
        self.mark_structure_changed();
        Ok(id)
    }

    /// Delete every selected row, last position first. Rows whose delete
    /// fails are kept and listed in the report. The selection is cleared
    /// either way.
    pub fn delete_selected_rows(&mut self) -> DeleteReport {
        let mut positions: Vec<usize> = self
            .state
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.state.selection.contains(&row.id))
            .map(|(position, _)| position)
            .collect();
        positions.sort_unstable_by(|a, b| b.cmp(a));

        let mut report = DeleteReport::default();
        for position in positions {
            let id = self.state.rows[position].id;
            match self.api.delete_row(id) {
                Ok(()) => {
                    self.state.rows.remove(position);
                    self.state.pending.remove(&id);
                    self.state.sync.remove(&id);
                    report.deleted.push(id);
                }
                Err(err) => {
                    log::warn!("Failed to delete row {}: {}", id, err);
                    report.failed.push((id, err.to_string()));
                }
            }
        }

        if !report.is_complete() {
            log::warn!(
                "Deleted {} row(s), {} failed",
                report.deleted.len(),
                report.failed.len()
            );
        }

        self.state.selection.clear();
        self.mark_structure_changed();
        self.invalidate_timeline();
        report
    }
}

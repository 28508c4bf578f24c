use chrono::Utc;

use super::TimelineTableApp;
use crate::services::table::TableError;

impl TimelineTableApp {
    pub(super) fn export_selected_to_csv(&mut self) {
        let export = match self.manager.export_selected(Utc::now()) {
            Ok(export) => export,
            Err(TableError::NothingSelected) => {
                self.alert
                    .show("Export", "Select at least one row to export.");
                return;
            }
            Err(err) => {
                log::error!("Failed to build CSV export: {}", err);
                self.toast_manager.error(err.to_string());
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .set_title("Export Selected Rows")
            .set_file_name(export.file_name.clone())
            .add_filter("CSV files", &["csv"])
            .save_file()
        else {
            return;
        };

        match export.write_to(&path) {
            Ok(()) => {
                log::info!("Exported selected rows to {:?}", path);
                self.toast_manager
                    .success(format!("Exported to {}", path.display()));
            }
            Err(err) => {
                log::error!("Failed to export CSV: {:#}", err);
                self.toast_manager.error(format!("Export failed: {}", err));
            }
        }
    }
}

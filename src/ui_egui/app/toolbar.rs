use chrono::Utc;

use super::confirm::ConfirmAction;
use super::TimelineTableApp;
use crate::models::column::is_default_column;
use crate::services::table::TableError;
use crate::ui_egui::dialogs::column_prompt::{ColumnPromptMode, ColumnPromptResult};

impl TimelineTableApp {
    pub(super) fn render_toolbar(&mut self, ctx: &egui::Context) {
        let enabled = !self.is_blocked();
        let selected = self.manager.summary().selected;

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("➕ Add Row").clicked() {
                        self.add_row();
                    }
                    if ui.button("Add Column").clicked() {
                        self.column_prompt.open(ColumnPromptMode::Add);
                    }
                    if ui.button("Delete Column").clicked() {
                        self.column_prompt.open(ColumnPromptMode::Delete);
                    }

                    ui.separator();

                    if ui
                        .add_enabled(selected > 0, egui::Button::new("🗑 Delete Selected"))
                        .clicked()
                    {
                        self.confirm_dialog
                            .request(ConfirmAction::DeleteRows { count: selected });
                    }
                    if ui.button("Export Selected").clicked() {
                        self.export_selected_to_csv();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("⟳ Reload").clicked() {
                            self.load_table();
                        }
                    });
                });
            });
        });
    }

    pub(super) fn handle_column_prompt(&mut self, ctx: &egui::Context) {
        let custom = self.manager.columns().custom().to_vec();

        match self.column_prompt.render(ctx, &custom) {
            ColumnPromptResult::Submitted {
                mode: ColumnPromptMode::Add,
                name,
            } => self.add_column(&name),
            ColumnPromptResult::Submitted {
                mode: ColumnPromptMode::Delete,
                name,
            } => {
                let name = name.trim().to_string();
                if is_default_column(&name) {
                    self.alert.show(
                        "Delete Column",
                        TableError::DefaultColumn(name).to_string(),
                    );
                } else {
                    self.confirm_dialog
                        .request(ConfirmAction::DeleteColumn { name });
                }
            }
            ColumnPromptResult::Open | ColumnPromptResult::Cancelled => {}
        }
    }

    fn add_row(&mut self) {
        match self.manager.add_row(Utc::now()) {
            Ok(id) => log::info!("Row {} added", id),
            Err(err) => self.toast_manager.error(format!("Failed to add row: {}", err)),
        }
    }

    fn add_column(&mut self, name: &str) {
        match self.manager.add_column(name) {
            Ok(()) => self
                .toast_manager
                .success(format!("Added column \"{}\"", name.trim())),
            Err(err) => self.alert.show("Add Column", column_error_message(&err)),
        }
    }

    pub(super) fn delete_column(&mut self, name: &str) {
        match self.manager.delete_column(name) {
            Ok(_) => self
                .toast_manager
                .success(format!("Deleted column \"{}\"", name)),
            Err(err) => self.alert.show("Delete Column", column_error_message(&err)),
        }
    }

    pub(super) fn delete_selected_rows(&mut self) {
        let report = self.manager.delete_selected_rows();
        if report.is_complete() {
            self.toast_manager
                .success(format!("Deleted {} row(s)", report.deleted.len()));
        } else {
            self.toast_manager.error(format!(
                "Deleted {} row(s); {} could not be deleted",
                report.deleted.len(),
                report.failed.len()
            ));
        }
    }
}

fn column_error_message(err: &TableError) -> String {
    match err {
        TableError::Api(api) => format!("Failed to update columns: {}", api),
        other => other.to_string(),
    }
}

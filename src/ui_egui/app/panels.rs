use std::time::Instant;

use super::{TimelineTableApp, TIMELINE_PANEL_HEIGHT};
use crate::ui_egui::views::grid_view::{render_grid, GridCommand};
use crate::ui_egui::views::timeline_view::render_timeline;

impl TimelineTableApp {
    pub(super) fn render_timeline_panel(&mut self, ctx: &egui::Context) {
        let enabled = !self.is_blocked();

        egui::TopBottomPanel::bottom("timeline_panel")
            .resizable(true)
            .default_height(TIMELINE_PANEL_HEIGHT)
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    ui.heading("Timeline");
                    ui.separator();
                    let viewport_width = ui.available_width();
                    render_timeline(ui, self.manager.timeline(viewport_width));
                });
            });
    }

    pub(super) fn render_grid_panel(&mut self, ctx: &egui::Context) {
        let enabled = !self.is_blocked();
        let grid = self.manager.grid();

        let commands = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(error) = &self.load_error {
                    ui.colored_label(egui::Color32::from_rgb(200, 70, 70), error);
                    ui.separator();
                }

                ui.add_enabled_ui(enabled, |ui| render_grid(ui, &grid)).inner
            })
            .inner;

        self.apply_grid_commands(commands);
    }

    fn apply_grid_commands(&mut self, commands: Vec<GridCommand>) {
        let now = Instant::now();
        for command in commands {
            match command {
                GridCommand::SelectAll(selected) => self.manager.select_all(selected),
                GridCommand::SetSelected { row_id, selected } => {
                    self.manager.set_selected(row_id, selected)
                }
                GridCommand::Edit {
                    row_id,
                    column,
                    value,
                } => {
                    if let Err(err) = self.manager.update_cell(row_id, &column, &value, now) {
                        log::warn!("Rejected edit of row {} column '{}': {}", row_id, column, err);
                        self.toast_manager.warning(err.to_string());
                    }
                }
            }
        }
    }
}

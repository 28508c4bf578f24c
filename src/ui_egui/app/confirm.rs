//! Confirmation dialog for destructive actions.

use egui::{Context, RichText};

use super::TimelineTableApp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete every selected row
    DeleteRows { count: usize },
    /// Delete a custom column by name
    DeleteColumn { name: String },
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteRows { .. } => "Delete Rows",
            ConfirmAction::DeleteColumn { .. } => "Delete Column",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteRows { count } => format!(
                "Delete {} selected row{}?\n\nThis action cannot be undone.",
                count,
                if *count == 1 { "" } else { "s" }
            ),
            ConfirmAction::DeleteColumn { name } => format!(
                "Delete the column \"{}\"?\n\nValues stored in this column stay with their rows but will no longer be shown.",
                name
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed,
    Cancelled,
    Pending,
}

#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    pub fn take_action(&mut self) -> Option<ConfirmAction> {
        self.pending_action.take()
    }

    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        let Some(action) = &self.pending_action else {
            return ConfirmResult::Pending;
        };

        let mut result = ConfirmResult::Pending;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.vertical(|ui| {
                        ui.label(action.message());
                    });
                });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let delete = egui::Button::new(RichText::new("Delete").color(egui::Color32::WHITE))
                        .fill(egui::Color32::from_rgb(180, 60, 60));
                    if ui.add(delete).clicked() {
                        result = ConfirmResult::Confirmed;
                    }
                    ui.add_space(10.0);
                    if ui.button("Cancel").clicked() {
                        result = ConfirmResult::Cancelled;
                    }
                });

                ui.add_space(5.0);
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmResult::Cancelled;
        }

        if result == ConfirmResult::Cancelled {
            self.pending_action = None;
        }

        result
    }
}

impl TimelineTableApp {
    pub(super) fn handle_confirm_dialog(&mut self, ctx: &Context) {
        if self.confirm_dialog.render(ctx) != ConfirmResult::Confirmed {
            return;
        }

        match self.confirm_dialog.take_action() {
            Some(ConfirmAction::DeleteRows { .. }) => self.delete_selected_rows(),
            Some(ConfirmAction::DeleteColumn { name }) => self.delete_column(&name),
            None => {}
        }
    }
}

//! Blocking message window. Everything else is disabled until it is dismissed.

use egui::{Context, RichText};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Alert {
    title: String,
    message: String,
}

#[derive(Debug, Default)]
pub struct AlertState {
    current: Option<Alert>,
}

impl AlertState {
    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.current = Some(Alert {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn render(&mut self, ctx: &Context) {
        let Some(alert) = &self.current else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(alert.title.as_str())
            .id(egui::Id::new("alert_window"))
            .collapsible(false)
            .resizable(false)
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(280.0);
                ui.add_space(8.0);
                ui.label(RichText::new(&alert.message));
                ui.add_space(12.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
            dismissed = true;
        }

        if dismissed {
            self.current = None;
        }
    }
}

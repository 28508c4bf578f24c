//! Status bar: row and selection counts, write-back state, server address.

use egui::{Color32, RichText};

use super::TimelineTableApp;

const SEPARATOR_WIDTH: f32 = 8.0;

fn secondary_text_color(is_dark: bool) -> Color32 {
    if is_dark {
        Color32::from_gray(160)
    } else {
        Color32::from_gray(100)
    }
}

impl TimelineTableApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let summary = self.manager.summary();
        let secondary = secondary_text_color(self.is_dark);

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(RichText::new(format!("{} rows", summary.rows)).small());
                    ui.add_space(SEPARATOR_WIDTH);
                    ui.label(
                        RichText::new(format!("{} selected", summary.selected))
                            .small()
                            .color(secondary),
                    );
                    ui.add_space(SEPARATOR_WIDTH);

                    if summary.unsynced > 0 {
                        ui.label(
                            RichText::new(format!("⚠ {} not saved", summary.unsynced))
                                .small()
                                .color(Color32::from_rgb(220, 90, 90)),
                        )
                        .on_hover_text("Edit the row again or reload to retry");
                    } else if summary.pending > 0 {
                        ui.label(
                            RichText::new(format!("Saving {}…", summary.pending))
                                .small()
                                .color(secondary),
                        );
                    } else {
                        ui.label(RichText::new("✓ Saved").small().color(secondary));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(&self.api_base_url)
                                .small()
                                .color(secondary),
                        );
                    });
                });
            });
    }
}

use egui::{Align2, Color32, FontId, Rect, Sense, Stroke};

use crate::services::timeline::{TimelineLayout, MIN_ITEM_WIDTH};

const ITEM_HEIGHT: f32 = 44.0;
const TEXT_PADDING: f32 = 8.0;

pub fn render_timeline(ui: &mut egui::Ui, layout: &TimelineLayout) {
    if layout.is_empty() {
        ui.weak("Select rows to show them on the timeline.");
        return;
    }

    egui::ScrollArea::both()
        .id_source("timeline_scroll")
        .show(ui, |ui| {
            // The last bar may start at the far right edge.
            let size = egui::vec2(layout.width + MIN_ITEM_WIDTH, layout.height);
            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
            let painter = ui.painter_at(rect);

            for item in &layout.items {
                let [r, g, b] = item.color.to_rgb();
                let bar = Rect::from_min_size(
                    rect.min + egui::vec2(item.left, item.top),
                    egui::vec2(item.width, ITEM_HEIGHT),
                );

                painter.rect_filled(bar, egui::Rounding::same(4.0), Color32::from_rgb(r, g, b));
                painter.rect_stroke(
                    bar,
                    egui::Rounding::same(4.0),
                    Stroke::new(1.0, Color32::from_black_alpha(40)),
                );
                painter.text(
                    bar.left_top() + egui::vec2(TEXT_PADDING, 6.0),
                    Align2::LEFT_TOP,
                    &item.label,
                    FontId::proportional(13.0),
                    Color32::from_gray(25),
                );
                painter.text(
                    bar.left_top() + egui::vec2(TEXT_PADDING, 25.0),
                    Align2::LEFT_TOP,
                    &item.date_label,
                    FontId::proportional(11.0),
                    Color32::from_gray(70),
                );
            }
        });
}

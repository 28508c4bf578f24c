use chrono::{Local, NaiveDateTime, Timelike};
use egui::{Color32, RichText};
use egui_extras::{Column, DatePickerButton, TableBuilder};

use crate::models::column::ColumnKind;
use crate::services::table::{CellInput, CellKey, GridView, SyncState};
use crate::utils::date::INPUT_FORMAT;

const ROW_HEIGHT: f32 = 28.0;
const HEADER_HEIGHT: f32 = 24.0;

/// What the user did to the grid this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCommand {
    SelectAll(bool),
    SetSelected { row_id: i64, selected: bool },
    Edit { row_id: i64, column: String, value: String },
}

impl GridCommand {
    fn edit(key: &CellKey, value: String) -> Self {
        GridCommand::Edit {
            row_id: key.row_id,
            column: key.column.clone(),
            value,
        }
    }
}

pub fn render_grid(ui: &mut egui::Ui, grid: &GridView) -> Vec<GridCommand> {
    let mut commands = Vec::new();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(44.0));
    for column in &grid.columns {
        table = table.column(match column.kind {
            ColumnKind::DateTime => Column::initial(240.0).at_least(220.0),
            ColumnKind::Text | ColumnKind::Custom | ColumnKind::Select => {
                Column::initial(170.0).at_least(80.0).clip(true)
            }
        });
    }

    table
        .header(HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                let mut all = grid.all_selected;
                if ui.checkbox(&mut all, "").on_hover_text("Select all").changed() {
                    commands.push(GridCommand::SelectAll(all));
                }
            });
            for column in &grid.columns {
                header.col(|ui| {
                    ui.strong(&column.header);
                });
            }
        })
        .body(|mut body| {
            for row in &grid.rows {
                body.row(ROW_HEIGHT, |mut table_row| {
                    table_row.col(|ui| {
                        let mut selected = row.selected;
                        if ui.checkbox(&mut selected, "").changed() {
                            commands.push(GridCommand::SetSelected {
                                row_id: row.row_id,
                                selected,
                            });
                        }
                        sync_marker(ui, &row.sync);
                    });

                    for (key, input) in &row.cells {
                        table_row.col(|ui| match input {
                            CellInput::DateTime(value) => {
                                datetime_cell(ui, key, value, &mut commands)
                            }
                            CellInput::Text(value) => text_cell(ui, key, value, &mut commands),
                        });
                    }
                });
            }
        });

    commands
}

fn sync_marker(ui: &mut egui::Ui, sync: &SyncState) {
    match sync {
        SyncState::Synced => {}
        SyncState::Pending => {
            ui.label(RichText::new("•").weak()).on_hover_text("Saving…");
        }
        SyncState::Unsynced { error } => {
            ui.label(RichText::new("⚠").color(Color32::from_rgb(220, 90, 90)))
                .on_hover_text(format!("Not saved: {}", error));
        }
    }
}

fn text_cell(ui: &mut egui::Ui, key: &CellKey, value: &str, commands: &mut Vec<GridCommand>) {
    let mut text = value.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .id(egui::Id::new(("cell", key.row_id, key.column.as_str())))
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        commands.push(GridCommand::edit(key, text));
    }
}

fn datetime_cell(ui: &mut egui::Ui, key: &CellKey, value: &str, commands: &mut Vec<GridCommand>) {
    let Ok(current) = NaiveDateTime::parse_from_str(value, INPUT_FORMAT) else {
        if ui.small_button("Set").clicked() {
            let now = Local::now().naive_local().format(INPUT_FORMAT).to_string();
            commands.push(GridCommand::edit(key, now));
        }
        return;
    };

    let mut date = current.date();
    let mut hour = current.hour();
    let mut minute = current.minute();
    let picker_id = format!("date_{}_{}", key.row_id, key.column);

    let mut changed = ui
        .add(DatePickerButton::new(&mut date).id_source(picker_id.as_str()))
        .changed();
    changed |= ui
        .add(
            egui::DragValue::new(&mut hour)
                .range(0..=23)
                .custom_formatter(|v, _| format!("{:02}", v as u32)),
        )
        .changed();
    ui.label(":");
    changed |= ui
        .add(
            egui::DragValue::new(&mut minute)
                .range(0..=59)
                .custom_formatter(|v, _| format!("{:02}", v as u32)),
        )
        .changed();

    if changed {
        if let Some(updated) = date.and_hms_opt(hour, minute, 0) {
            commands.push(GridCommand::edit(key, updated.format(INPUT_FORMAT).to_string()));
        }
    }
}

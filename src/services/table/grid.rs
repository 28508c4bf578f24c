use chrono::{Local, TimeZone};

use super::{SyncState, TableManager};
use crate::models::column::{header_label, ColumnKind};
use crate::models::event::EventRow;
use crate::services::client::TableApi;
use crate::utils::date::format_input;

/// Stable identity of a cell across rebuilds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub row_id: i64,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellInput {
    /// Local `YYYY-MM-DDTHH:MM`, empty when unset.
    DateTime(String),
    Text(String),
}

impl CellInput {
    pub fn value(&self) -> &str {
        match self {
            Self::DateTime(value) | Self::Text(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub name: String,
    pub header: String,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub row_id: i64,
    pub selected: bool,
    pub sync: SyncState,
    /// One per data column, in column order.
    pub cells: Vec<(CellKey, CellInput)>,
}

/// Snapshot of everything the grid draws.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    pub structure_revision: u64,
    pub all_selected: bool,
    /// Data columns only; the selection checkbox column is implicit.
    pub columns: Vec<GridColumn>,
    pub rows: Vec<GridRow>,
}

impl<A: TableApi> TableManager<A> {
    pub fn grid(&self) -> GridView {
        self.grid_in(&Local)
    }

    pub fn grid_in<Tz>(&self, tz: &Tz) -> GridView
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let columns: Vec<GridColumn> = self
            .state
            .columns
            .data_columns()
            .filter_map(|name| {
                self.state.columns.kind_of(name).map(|kind| GridColumn {
                    name: name.to_string(),
                    header: header_label(name),
                    kind,
                })
            })
            .collect();

        let rows = self
            .state
            .rows
            .iter()
            .map(|row| GridRow {
                row_id: row.id,
                selected: self.state.selection.contains(&row.id),
                sync: self.sync_state(row.id),
                cells: columns
                    .iter()
                    .map(|column| {
                        (
                            CellKey {
                                row_id: row.id,
                                column: column.name.clone(),
                            },
                            cell_input(row, column, tz),
                        )
                    })
                    .collect(),
            })
            .collect();

        GridView {
            structure_revision: self.state.structure_revision,
            all_selected: self.all_selected(),
            columns,
            rows,
        }
    }
}

fn cell_input<Tz>(row: &EventRow, column: &GridColumn, tz: &Tz) -> CellInput
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match column.kind {
        ColumnKind::DateTime => {
            let value = if column.name == "start_datetime" {
                row.start_datetime
            } else {
                row.end_datetime
            };
            CellInput::DateTime(
                value
                    .map(|value| format_input(value, tz))
                    .unwrap_or_default(),
            )
        }
        ColumnKind::Text if column.name == "title" => CellInput::Text(row.title.clone()),
        ColumnKind::Text => CellInput::Text(row.description.clone()),
        ColumnKind::Custom | ColumnKind::Select => {
            CellInput::Text(row.custom_value(&column.name).to_string())
        }
    }
}

// Export service
// CSV export of table rows in display column order

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local, TimeZone, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::models::column::{header_label, ColumnKind, ColumnSet};
use crate::models::event::EventRow;
use crate::utils::date::{file_stamp, format_display};

/// A rendered export, ready to be written wherever the user chooses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
}

impl CsvExport {
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.contents)
            .with_context(|| format!("Failed to write export to {}", path.display()))
    }
}

/// `timeline_export_YYYY-MM-DDTHH-MM-SS.csv`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("timeline_export_{}.csv", file_stamp(now))
}

pub fn export_rows<'a, I>(columns: &ColumnSet, rows: I, now: DateTime<Utc>) -> Result<CsvExport>
where
    I: IntoIterator<Item = &'a EventRow>,
{
    Ok(CsvExport {
        file_name: export_file_name(now),
        contents: render_csv(columns, rows, &Local)?,
    })
}

/// Render rows as CSV. Every field is quoted; datetimes are shown in `tz`.
pub fn render_csv<'a, I, Tz>(columns: &ColumnSet, rows: I, tz: &Tz) -> Result<String>
where
    I: IntoIterator<Item = &'a EventRow>,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let names: Vec<&str> = columns.data_columns().collect();

    writer
        .write_record(names.iter().map(|name| header_label(name)))
        .context("Failed to write CSV header")?;

    for row in rows {
        let record: Vec<String> = names
            .iter()
            .map(|name| cell_text(columns, row, name, tz))
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("Failed to write CSV record for row {}", row.id))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("Failed to finish CSV output: {}", err.error()))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

fn cell_text<Tz>(columns: &ColumnSet, row: &EventRow, name: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let datetime = |value: Option<DateTime<Utc>>| {
        value
            .map(|value| format_display(value, tz))
            .unwrap_or_default()
    };

    match (columns.kind_of(name), name) {
        (Some(ColumnKind::DateTime), "start_datetime") => datetime(row.start_datetime),
        (Some(ColumnKind::DateTime), _) => datetime(row.end_datetime),
        (Some(ColumnKind::Text), "title") => row.title.clone(),
        (Some(ColumnKind::Text), _) => row.description.clone(),
        _ => row.custom_value(name).to_string(),
    }
}

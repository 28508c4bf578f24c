use anyhow::{Context, Result};
use rusqlite::{params, Connection};

/// Fixed data columns as `(name, column_order, data_type)`.
pub const STRUCTURE_COLUMNS: [(&str, i64, &str); 4] = [
    ("start_datetime", 1, "datetime"),
    ("end_datetime", 2, "datetime"),
    ("title", 3, "text"),
    ("description", 4, "text"),
];

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_table_data(conn)?;
    create_table_columns(conn)?;
    seed_table_columns(conn)?;
    create_custom_columns(conn)?;
    Ok(())
}

fn create_table_data(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS table_data (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            start_datetime TEXT,
            end_datetime TEXT,
            title TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            custom_fields TEXT NOT NULL DEFAULT '{}',
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create table_data table")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_table_data_start ON table_data(start_datetime)",
        [],
    )
    .context("Failed to create table_data start index")?;

    Ok(())
}

fn create_table_columns(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS table_columns (
            name TEXT PRIMARY KEY,
            column_order INTEGER NOT NULL UNIQUE,
            data_type TEXT NOT NULL
        )",
        [],
    )
    .context("Failed to create table_columns table")?;

    Ok(())
}

fn seed_table_columns(conn: &Connection) -> Result<()> {
    for (name, order, data_type) in STRUCTURE_COLUMNS {
        conn.execute(
            "INSERT OR IGNORE INTO table_columns (name, column_order, data_type)
             VALUES (?1, ?2, ?3)",
            params![name, order, data_type],
        )
        .with_context(|| format!("Failed to seed structure column {}", name))?;
    }

    Ok(())
}

fn create_custom_columns(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS custom_columns (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            column_name TEXT NOT NULL UNIQUE,
            column_order INTEGER NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create custom_columns table")?;

    Ok(())
}

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{self, Result};

use crate::models::event::CustomFields;

/// Fixed-width UTC text, so lexicographic order in SQLite is chronological.
pub(crate) fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn format_optional_timestamp(value: Option<&DateTime<Utc>>) -> Option<String> {
    value.map(format_timestamp)
}

pub(crate) fn parse_timestamp(value: Option<String>) -> Result<Option<DateTime<Utc>>> {
    let Some(value) = value else {
        return Ok(None);
    };

    DateTime::parse_from_rfc3339(&value)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

pub(crate) fn serialize_custom_fields(fields: &CustomFields) -> String {
    serde_json::to_string(fields).unwrap_or_else(|_| "{}".to_string())
}

pub(crate) fn deserialize_custom_fields(json: Option<String>) -> Result<CustomFields> {
    let Some(json) = json else {
        return Ok(CustomFields::new());
    };

    serde_json::from_str(&json).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

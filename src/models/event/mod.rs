// Event module
// Timeline event rows as stored by the server and mirrored by the client

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Custom column name -> cell value.
pub type CustomFields = BTreeMap<String, String>;

/// A persisted timeline event row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    pub id: i64,
    #[serde(default)]
    pub start_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

impl EventRow {
    /// End of the event, falling back to the start when no end is set.
    pub fn resolved_end(&self) -> Option<DateTime<Utc>> {
        self.end_datetime.or(self.start_datetime)
    }

    /// Merge an authoritative server echo into this row.
    ///
    /// Server fields replace local ones. Custom fields are combined key by key
    /// with the server winning on conflicts, so keys the server did not echo
    /// keep their local value.
    pub fn merge_server_echo(&mut self, server: EventRow) {
        let EventRow {
            id,
            start_datetime,
            end_datetime,
            title,
            description,
            custom_fields,
        } = server;

        self.id = id;
        self.start_datetime = start_datetime;
        self.end_datetime = end_datetime;
        self.title = title;
        self.description = description;
        self.custom_fields.extend(custom_fields);
    }

    /// Read the cell value for a custom column, empty when unset.
    pub fn custom_value(&self, column: &str) -> &str {
        self.custom_fields
            .get(column)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Body of `POST /api/table/data`.
///
/// Custom fields travel flattened next to the fixed fields. A nested
/// `custom_fields` object is also accepted and merged in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEventRow {
    #[serde(default)]
    pub start_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl NewEventRow {
    /// A blank row spanning a single instant.
    pub fn blank_at(now: DateTime<Utc>) -> Self {
        Self {
            start_datetime: Some(now),
            end_datetime: Some(now),
            ..Self::default()
        }
    }

    /// Attach a custom field value as a flattened top-level key.
    pub fn with_custom_field(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra
            .insert(column.into(), Value::String(value.into()));
        self
    }

    /// Collect the custom fields carried by this payload.
    ///
    /// Non-string scalars are stored by their JSON text; nulls are skipped.
    pub fn custom_fields(&self) -> CustomFields {
        let mut fields = CustomFields::new();
        for (key, value) in &self.extra {
            if key == "custom_fields" {
                if let Value::Object(nested) = value {
                    for (nested_key, nested_value) in nested {
                        if let Some(text) = value_to_text(nested_value) {
                            fields.insert(nested_key.clone(), text);
                        }
                    }
                }
                continue;
            }
            if let Some(text) = value_to_text(value) {
                fields.insert(key.clone(), text);
            }
        }
        fields
    }
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Object(_) | Value::Array(_) => None,
        other => Some(other.to_string()),
    }
}

/// Body of `PUT /api/table/data/:id`.
///
/// `None` leaves the fixed field unchanged; `custom_fields` always replaces
/// the stored map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowUpdate {
    #[serde(default)]
    pub start_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

impl From<&EventRow> for RowUpdate {
    fn from(row: &EventRow) -> Self {
        Self {
            start_datetime: row.start_datetime,
            end_datetime: row.end_datetime,
            title: Some(row.title.clone()),
            description: Some(row.description.clone()),
            custom_fields: row.custom_fields.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_row() -> EventRow {
        EventRow {
            id: 7,
            start_datetime: Some(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()),
            end_datetime: None,
            title: "Kickoff".to_string(),
            description: String::new(),
            custom_fields: CustomFields::new(),
        }
    }

    #[test]
    fn test_resolved_end_defaults_to_start() {
        let row = sample_row();
        assert_eq!(row.resolved_end(), row.start_datetime);
    }

    #[test]
    fn test_merge_keeps_local_custom_keys_missing_from_echo() {
        let mut local = sample_row();
        local.title = "Local title".to_string();
        local
            .custom_fields
            .insert("owner".to_string(), "dana".to_string());
        local
            .custom_fields
            .insert("room".to_string(), "A1".to_string());

        let mut echo = sample_row();
        echo.title = "Server title".to_string();
        echo.custom_fields
            .insert("room".to_string(), "B2".to_string());

        local.merge_server_echo(echo);

        assert_eq!(local.title, "Server title");
        assert_eq!(local.custom_value("owner"), "dana");
        assert_eq!(local.custom_value("room"), "B2");
    }

    #[test]
    fn test_new_row_collects_flattened_and_nested_custom_fields() {
        let payload: NewEventRow = serde_json::from_value(json!({
            "start_datetime": "2025-03-01T09:00:00Z",
            "end_datetime": null,
            "title": "Launch",
            "description": "",
            "owner": "dana",
            "priority": 2,
            "custom_fields": { "room": "A1" }
        }))
        .unwrap();

        let fields = payload.custom_fields();
        assert_eq!(fields.get("owner").map(String::as_str), Some("dana"));
        assert_eq!(fields.get("priority").map(String::as_str), Some("2"));
        assert_eq!(fields.get("room").map(String::as_str), Some("A1"));
        assert!(!fields.contains_key("custom_fields"));
        assert_eq!(payload.title, "Launch");
    }

    #[test]
    fn test_row_update_carries_full_row() {
        let mut row = sample_row();
        row.custom_fields
            .insert("owner".to_string(), "dana".to_string());
        let update = RowUpdate::from(&row);

        assert_eq!(update.title.as_deref(), Some("Kickoff"));
        assert_eq!(update.description.as_deref(), Some(""));
        assert_eq!(update.custom_fields, row.custom_fields);
    }

    #[test]
    fn test_row_deserializes_with_missing_optional_fields() {
        let row: EventRow = serde_json::from_value(json!({ "id": 3 })).unwrap();
        assert_eq!(row.id, 3);
        assert!(row.start_datetime.is_none());
        assert!(row.custom_fields.is_empty());
    }
}

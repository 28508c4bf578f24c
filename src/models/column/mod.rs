// Column module
// Fixed and custom table column definitions

use serde::{Deserialize, Serialize};

/// Synthetic selection column. Rendered as a checkbox, never persisted.
pub const SELECT_COLUMN: &str = "select";

/// Columns every table has, in display order. None of them can be removed.
pub const DEFAULT_COLUMNS: [&str; 5] = [
    SELECT_COLUMN,
    "start_datetime",
    "end_datetime",
    "title",
    "description",
];

/// One entry of `GET /api/table/structure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub column_order: i64,
    pub data_type: String,
}

/// A user-defined column stored in `custom_columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColumn {
    #[serde(default)]
    pub id: Option<i64>,
    pub column_name: String,
    pub column_order: i64,
}

/// Body of `POST /api/columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewColumn {
    pub column_name: String,
}

/// Body returned by `DELETE /api/columns/:columnName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDeleted {
    pub success: bool,
    #[serde(rename = "rowsDeleted")]
    pub rows_deleted: usize,
}

/// How a column's cells are read, written and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Select,
    DateTime,
    Text,
    Custom,
}

/// Returns true for the fixed columns that can never be deleted.
pub fn is_default_column(name: &str) -> bool {
    DEFAULT_COLUMNS.contains(&name)
}

/// Header label for a column: underscores become spaces, upper-cased.
pub fn header_label(name: &str) -> String {
    name.replace('_', " ").to_uppercase()
}

/// The active column list: fixed defaults followed by custom columns in
/// creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    custom: Vec<String>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            custom: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace the custom columns, keeping their given order.
    pub fn set_custom(&mut self, names: Vec<String>) {
        self.custom = names;
    }

    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    /// Every active column, `select` included.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        DEFAULT_COLUMNS
            .iter()
            .copied()
            .chain(self.custom.iter().map(String::as_str))
    }

    /// Active columns that hold data (everything but `select`).
    pub fn data_columns(&self) -> impl Iterator<Item = &str> {
        self.all().filter(|name| *name != SELECT_COLUMN)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.all().any(|column| column == name)
    }

    pub fn is_custom(&self, name: &str) -> bool {
        self.custom.iter().any(|column| column == name)
    }

    pub fn push_custom(&mut self, name: impl Into<String>) {
        self.custom.push(name.into());
    }

    /// Remove a custom column. Returns false when it was not present.
    pub fn remove_custom(&mut self, name: &str) -> bool {
        let before = self.custom.len();
        self.custom.retain(|column| column != name);
        self.custom.len() != before
    }

    /// Classify a column name against this set.
    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        match name {
            SELECT_COLUMN => Some(ColumnKind::Select),
            "start_datetime" | "end_datetime" => Some(ColumnKind::DateTime),
            "title" | "description" => Some(ColumnKind::Text),
            _ if self.is_custom(name) => Some(ColumnKind::Custom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("start_datetime", "START DATETIME"; "datetime column")]
    #[test_case("title", "TITLE"; "plain column")]
    #[test_case("owner", "OWNER"; "custom column")]
    #[test_case("due_by_team", "DUE BY TEAM"; "several underscores")]
    fn test_header_label(name: &str, expected: &str) {
        assert_eq!(header_label(name), expected);
    }

    #[test]
    fn test_column_set_orders_defaults_before_custom() {
        let set = ColumnSet::with_custom(["owner", "room"]);
        let names: Vec<&str> = set.all().collect();
        assert_eq!(
            names,
            vec![
                "select",
                "start_datetime",
                "end_datetime",
                "title",
                "description",
                "owner",
                "room"
            ]
        );
        assert_eq!(set.data_columns().count(), 6);
    }

    #[test]
    fn test_kind_of() {
        let set = ColumnSet::with_custom(["owner"]);
        assert_eq!(set.kind_of("select"), Some(ColumnKind::Select));
        assert_eq!(set.kind_of("end_datetime"), Some(ColumnKind::DateTime));
        assert_eq!(set.kind_of("description"), Some(ColumnKind::Text));
        assert_eq!(set.kind_of("owner"), Some(ColumnKind::Custom));
        assert_eq!(set.kind_of("missing"), None);
    }

    #[test]
    fn test_remove_custom_reports_presence() {
        let mut set = ColumnSet::with_custom(["owner"]);
        assert!(set.remove_custom("owner"));
        assert!(!set.remove_custom("owner"));
        assert!(set.custom().is_empty());
    }

    #[test]
    fn test_default_columns_are_protected() {
        for name in DEFAULT_COLUMNS {
            assert!(is_default_column(name));
        }
        assert!(!is_default_column("owner"));
    }

    #[test]
    fn test_column_deleted_uses_camel_case_count() {
        let body = serde_json::to_value(ColumnDeleted {
            success: true,
            rows_deleted: 1,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "success": true, "rowsDeleted": 1 }));
    }
}

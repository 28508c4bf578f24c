use super::{TableError, TableManager};
use crate::models::column::is_default_column;
use crate::services::client::TableApi;

impl<A: TableApi> TableManager<A> {
    /// Create a custom column. The name is trimmed; empty names and names
    /// already in the table are refused without contacting the server.
    pub fn add_column(&mut self, name: &str) -> Result<(), TableError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TableError::EmptyColumnName);
        }
        if self.state.columns.contains(name) {
            return Err(TableError::DuplicateColumn(name.to_string()));
        }

        let created = self.api.create_column(name).map_err(|err| {
            log::error!("Failed to add column '{}': {}", name, err);
            err
        })?;

        log::info!(
            "Added column '{}' at order {}",
            created.column_name,
            created.column_order
        );
        self.state.columns.push_custom(created.column_name);
        self.mark_structure_changed();
        Ok(())
    }

    /// Delete a custom column. Empty names and default columns are refused
    /// locally; the local column list only changes once the server confirms.
    pub fn delete_column(&mut self, name: &str) -> Result<usize, TableError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TableError::EmptyColumnName);
        }
        if is_default_column(name) {
            return Err(TableError::DefaultColumn(name.to_string()));
        }

        let deleted = self.api.delete_column(name).map_err(|err| {
            log::error!("Failed to delete column '{}': {}", name, err);
            err
        })?;

        if !self.state.columns.remove_custom(name) {
            log::warn!("Server deleted column '{}' that was not shown locally", name);
        }
        self.mark_structure_changed();
        Ok(deleted.rows_deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::models::column::ColumnDeleted;
    use crate::services::client::{ApiClientError, MockTableApi};
    use mockall::predicate::eq;
    use std::time::Duration;
    use test_case::test_case;

    fn manager(api: MockTableApi) -> TableManager<MockTableApi> {
        let mut manager = TableManager::new(api, Duration::from_millis(300));
        manager.initialize().unwrap();
        manager
    }

    #[test]
    fn test_add_column_appends_after_server_confirms() {
        let mut api = loaded_api(vec![custom_column("owner", 1)], Vec::new());
        api.expect_create_column()
            .with(eq("room"))
            .times(1)
            .returning(|name| Ok(custom_column(name, 2)));
        let mut manager = manager(api);
        let revision = manager.structure_revision();

        manager.add_column("  room ").unwrap();

        assert_eq!(manager.columns().custom(), ["owner", "room"]);
        assert!(manager.structure_revision() > revision);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    #[test_case("title"; "default column")]
    #[test_case("owner"; "existing custom column")]
    fn test_add_column_rejected_locally(name: &str) {
        let mut api = loaded_api(vec![custom_column("owner", 1)], Vec::new());
        api.expect_create_column().times(0);
        let mut manager = manager(api);

        let err = manager.add_column(name).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(manager.columns().custom(), ["owner"]);
    }

    #[test_case("select")]
    #[test_case("start_datetime")]
    #[test_case("end_datetime")]
    #[test_case("title")]
    #[test_case("description")]
    fn test_delete_default_column_makes_no_request(name: &str) {
        let mut api = loaded_api(Vec::new(), Vec::new());
        api.expect_delete_column().times(0);
        let mut manager = manager(api);

        let err = manager.delete_column(name).unwrap_err();
        assert!(matches!(err, TableError::DefaultColumn(_)));
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    fn test_delete_empty_column_name_makes_no_request(name: &str) {
        let mut api = loaded_api(vec![custom_column("owner", 1)], Vec::new());
        api.expect_delete_column().times(0);
        let mut manager = manager(api);
        let revision = manager.structure_revision();

        let err = manager.delete_column(name).unwrap_err();

        assert!(matches!(err, TableError::EmptyColumnName));
        assert!(err.is_validation());
        assert_eq!(manager.columns().custom(), ["owner"]);
        assert_eq!(manager.structure_revision(), revision);
    }

    #[test]
    fn test_delete_column_removes_on_success() {
        let mut api = loaded_api(vec![custom_column("owner", 1)], Vec::new());
        api.expect_delete_column()
            .with(eq("owner"))
            .times(1)
            .returning(|_| {
                Ok(ColumnDeleted {
                    success: true,
                    rows_deleted: 1,
                })
            });
        let mut manager = manager(api);

        assert_eq!(manager.delete_column("owner").unwrap(), 1);
        assert!(manager.columns().custom().is_empty());
    }

    #[test]
    fn test_delete_column_kept_when_server_refuses() {
        let mut api = loaded_api(vec![custom_column("owner", 1)], Vec::new());
        api.expect_delete_column().times(1).returning(|_| {
            Err(ApiClientError::Status {
                status: 404,
                message: "Column not found in database".to_string(),
            })
        });
        let mut manager = manager(api);
        let revision = manager.structure_revision();

        let err = manager.delete_column("owner").unwrap_err();

        assert!(matches!(err, TableError::Api(ref e) if e.is_not_found()));
        assert_eq!(manager.columns().custom(), ["owner"]);
        assert_eq!(manager.structure_revision(), revision);
    }
}

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::{ApiClientError, ApiClientResult, TableApi};
use crate::models::column::{ColumnDefinition, ColumnDeleted, CustomColumn, NewColumn};
use crate::models::event::{EventRow, NewEventRow, RowUpdate};
use crate::models::settings::ClientSettings;
use crate::services::api::{DeleteMessage, ErrorBody};

/// Blocking HTTP implementation of [`TableApi`].
pub struct HttpTableApi {
    client: Client,
    base_url: String,
}

impl HttpTableApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build table API HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self> {
        Self::new(
            &settings.api_base_url,
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> ApiClientResult<T> {
        let response = request.send().map_err(|source| ApiClientError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let fallback = status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string();
            let message = response
                .json::<ErrorBody>()
                .map(|body| body.error)
                .unwrap_or(fallback);
            return Err(ApiClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().map_err(|err| ApiClientError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        })
    }
}

impl TableApi for HttpTableApi {
    fn fetch_structure(&self) -> ApiClientResult<Vec<ColumnDefinition>> {
        let url = self.url("/api/table/structure");
        self.send(self.client.get(&url), &url)
    }

    fn list_rows(&self) -> ApiClientResult<Vec<EventRow>> {
        let url = self.url("/api/table/data");
        self.send(self.client.get(&url), &url)
    }

    fn create_row(&self, row: &NewEventRow) -> ApiClientResult<EventRow> {
        let url = self.url("/api/table/data");
        self.send(self.client.post(&url).json(row), &url)
    }

    fn update_row(&self, id: i64, update: &RowUpdate) -> ApiClientResult<EventRow> {
        let url = self.url(&format!("/api/table/data/{}", id));
        self.send(self.client.put(&url).json(update), &url)
    }

    fn delete_row(&self, id: i64) -> ApiClientResult<()> {
        let url = self.url(&format!("/api/table/data/{}", id));
        let _: DeleteMessage = self.send(self.client.delete(&url), &url)?;
        Ok(())
    }

    fn list_columns(&self) -> ApiClientResult<Vec<CustomColumn>> {
        let url = self.url("/api/columns");
        self.send(self.client.get(&url), &url)
    }

    fn create_column(&self, name: &str) -> ApiClientResult<CustomColumn> {
        let url = self.url("/api/columns");
        let body = NewColumn {
            column_name: name.to_string(),
        };
        self.send(self.client.post(&url).json(&body), &url)
    }

    fn delete_column(&self, name: &str) -> ApiClientResult<ColumnDeleted> {
        let url = self.url(&format!("/api/columns/{}", urlencoding::encode(name)));
        self.send(self.client.delete(&url), &url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = HttpTableApi::new("http://localhost:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.url("/api/columns"), "http://localhost:3000/api/columns");
    }

    #[test]
    fn test_from_settings_uses_base_url() {
        let settings = ClientSettings {
            api_base_url: "http://timeline.internal:8080".to_string(),
            ..ClientSettings::default()
        };
        let api = HttpTableApi::from_settings(&settings).unwrap();
        assert_eq!(api.base_url(), "http://timeline.internal:8080");
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        // Port 9 (discard) is essentially never bound on test hosts.
        let api = HttpTableApi::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = api.list_rows().unwrap_err();
        assert!(matches!(err, ApiClientError::Transport { .. }));
    }
}

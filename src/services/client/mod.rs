//! Client side of the table API.
//! `TableApi` is the contract the table manager depends on; `HttpTableApi`
//! implements it over HTTP.

pub mod http;

use crate::models::column::{ColumnDefinition, ColumnDeleted, CustomColumn};
use crate::models::event::{EventRow, NewEventRow, RowUpdate};

pub use http::HttpTableApi;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    /// The request never produced a response (connection refused, timeout...).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-2xx status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ApiClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

pub type ApiClientResult<T> = Result<T, ApiClientError>;

/// Operations the table manager needs from the CRUD API.
#[cfg_attr(test, mockall::automock)]
pub trait TableApi {
    /// Fixed column definitions. The manager builds its defaults locally and
    /// does not call this.
    fn fetch_structure(&self) -> ApiClientResult<Vec<ColumnDefinition>>;
    fn list_rows(&self) -> ApiClientResult<Vec<EventRow>>;
    fn create_row(&self, row: &NewEventRow) -> ApiClientResult<EventRow>;
    fn update_row(&self, id: i64, update: &RowUpdate) -> ApiClientResult<EventRow>;
    fn delete_row(&self, id: i64) -> ApiClientResult<()>;
    fn list_columns(&self) -> ApiClientResult<Vec<CustomColumn>>;
    fn create_column(&self, name: &str) -> ApiClientResult<CustomColumn>;
    fn delete_column(&self, name: &str) -> ApiClientResult<ColumnDeleted>;
}

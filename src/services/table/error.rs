use crate::services::client::ApiClientError;

/// Why a cell edit was refused. Refused edits leave the row untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellEditError {
    #[error("Row {0} does not exist")]
    UnknownRow(i64),
    #[error("Column \"{0}\" does not exist")]
    UnknownColumn(String),
    #[error("The selection column cannot be edited")]
    NotEditable,
    #[error("\"{0}\" is not a valid date and time")]
    InvalidDateTime(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Column name cannot be empty")]
    EmptyColumnName,
    #[error("Column \"{0}\" already exists")]
    DuplicateColumn(String),
    #[error("Cannot delete default column \"{0}\"")]
    DefaultColumn(String),
    #[error("Select at least one row first")]
    NothingSelected,
    #[error(transparent)]
    CellEdit(#[from] CellEditError),
    #[error(transparent)]
    Api(#[from] ApiClientError),
    #[error("Export failed: {0:#}")]
    Export(anyhow::Error),
}

impl TableError {
    /// True for errors raised before any request was made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyColumnName
                | Self::DuplicateColumn(_)
                | Self::DefaultColumn(_)
                | Self::NothingSelected
                | Self::CellEdit(_)
        )
    }
}

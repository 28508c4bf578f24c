//! Custom column endpoints: `/api/columns`.

use axum::extract::State;
use axum::routing::{delete, get};
use axum::{Json, Router};

use crate::models::column::{is_default_column, ColumnDeleted, CustomColumn, NewColumn};
use crate::services::api::error::{ApiError, ApiResult};
use crate::services::api::extract::{ApiJson, ApiPath};
use crate::services::api::state::ApiState;
use crate::services::column::ColumnService;

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/columns", get(list_columns).post(create_column))
        .route("/api/columns/:column_name", delete(delete_column))
}

/// `GET /api/columns`
pub async fn list_columns(State(state): State<ApiState>) -> ApiResult<Json<Vec<CustomColumn>>> {
    let columns = state.with_database(|db| Ok(ColumnService::new(db.connection()).list_custom()?))?;
    Ok(Json(columns))
}

/// `POST /api/columns`
pub async fn create_column(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<NewColumn>,
) -> ApiResult<Json<CustomColumn>> {
    let name = payload.column_name.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("column_name cannot be empty"));
    }
    if is_default_column(name) {
        return Err(ApiError::bad_request(format!(
            "{} is a built-in column",
            name
        )));
    }

    let column =
        state.with_database(|db| Ok(ColumnService::new(db.connection()).create_custom(name)?))?;
    log::info!(
        "Created column {} at order {}",
        column.column_name,
        column.column_order
    );
    Ok(Json(column))
}

/// `DELETE /api/columns/:column_name`
pub async fn delete_column(
    State(state): State<ApiState>,
    ApiPath(column_name): ApiPath<String>,
) -> ApiResult<Json<ColumnDeleted>> {
    log::debug!("Delete requested for column {}", column_name);
    let rows_deleted = state
        .with_database(|db| Ok(ColumnService::new(db.connection()).delete_custom(&column_name)?))?;

    if rows_deleted == 0 {
        log::info!("Column {} not found, nothing deleted", column_name);
        return Err(ApiError::not_found("Column not found in database"));
    }

    log::info!("Deleted column {}", column_name);
    Ok(Json(ColumnDeleted {
        success: true,
        rows_deleted,
    }))
}

//! Row endpoints: `/api/table/structure` and `/api/table/data`.

use axum::extract::State;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::models::column::ColumnDefinition;
use crate::models::event::{EventRow, NewEventRow, RowUpdate};
use crate::services::api::error::{ApiError, ApiResult};
use crate::services::api::extract::{ApiJson, ApiPath};
use crate::services::api::state::ApiState;
use crate::services::column::ColumnService;
use crate::services::event::EventRowService;

/// Body of `DELETE /api/table/data/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMessage {
    pub message: String,
}

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/table/structure", get(get_structure))
        .route("/api/table/data", get(list_rows).post(create_row))
        .route("/api/table/data/:id", put(update_row).delete(delete_row))
}

/// `GET /api/table/structure`
pub async fn get_structure(State(state): State<ApiState>) -> ApiResult<Json<Vec<ColumnDefinition>>> {
    let structure =
        state.with_database(|db| Ok(ColumnService::new(db.connection()).list_structure()?))?;
    Ok(Json(structure))
}

/// `GET /api/table/data`
pub async fn list_rows(State(state): State<ApiState>) -> ApiResult<Json<Vec<EventRow>>> {
    let rows = state.with_database(|db| Ok(EventRowService::new(db.connection()).list_all()?))?;
    log::debug!("Sending {} rows", rows.len());
    Ok(Json(rows))
}

/// `POST /api/table/data`
pub async fn create_row(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<NewEventRow>,
) -> ApiResult<Json<EventRow>> {
    let created =
        state.with_database(|db| Ok(EventRowService::new(db.connection()).create(&payload)?))?;
    log::info!("Created row {}", created.id);
    Ok(Json(created))
}

/// `PUT /api/table/data/:id`
pub async fn update_row(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(update): ApiJson<RowUpdate>,
) -> ApiResult<Json<EventRow>> {
    log::debug!("Updating row {} with {:?}", id, update);
    let updated = state.with_database(|db| {
        EventRowService::new(db.connection())
            .update(id, &update)?
            .ok_or_else(|| ApiError::not_found(format!("Row {} not found", id)))
    })?;
    Ok(Json(updated))
}

/// `DELETE /api/table/data/:id`
///
/// Deleting an id that does not exist still answers with the message.
pub async fn delete_row(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<DeleteMessage>> {
    let removed =
        state.with_database(|db| Ok(EventRowService::new(db.connection()).delete(id)?))?;
    if removed {
        log::info!("Deleted row {}", id);
    } else {
        log::debug!("Delete requested for missing row {}", id);
    }
    Ok(Json(DeleteMessage {
        message: "Row deleted successfully".to_string(),
    }))
}

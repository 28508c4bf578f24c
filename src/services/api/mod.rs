//! HTTP CRUD API over the event and column stores.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use axum::extract::OriginalUri;
use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use extract::{ApiJson, ApiPath};
pub use routes::rows::DeleteMessage;
pub use state::ApiState;

/// Creates the table API router.
pub fn table_router(state: ApiState) -> Router {
    Router::new()
        .merge(routes::rows::routes())
        .merge(routes::columns::routes())
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API on an already bound listener until the task is dropped.
pub async fn serve(listener: TcpListener, state: ApiState) -> anyhow::Result<()> {
    let address = listener.local_addr()?;
    log::info!("Server running on {}", address);
    axum::serve(listener, table_router(state)).await?;
    Ok(())
}

async fn not_found(method: Method, uri: OriginalUri) -> ApiError {
    ApiError::not_found(format!("No route for {} {}", method, uri.0.path()))
}

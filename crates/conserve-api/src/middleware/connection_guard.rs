//! Duplicate connection guard
//!
//! Runs in front of `POST /users/:user_id/connections`. The body is buffered
//! so `connected_id` can be read, then handed on to the handler untouched.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use conserve_service::ConnectionService;
use serde::Deserialize;
use tracing::debug;

use crate::extractors::ApiPath;
use crate::response::ApiError;
use crate::state::AppState;

/// Largest request body the guard will buffer
pub const MAX_GUARD_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Deserialize)]
struct ConnectionTarget {
    connected_id: i32,
}

/// Reject the request with 403 when the user is already connected to `connected_id`
pub async fn connection_guard(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_GUARD_BODY_BYTES)
        .await
        .map_err(|e| ApiError::invalid_body(e.to_string()))?;

    let target: ConnectionTarget =
        serde_json::from_slice(&bytes).map_err(|e| ApiError::invalid_body(e.to_string()))?;

    ConnectionService::new(state.service_context())
        .check_connection(user_id, target.connected_id)
        .await?;

    debug!(user_id, connected_id = target.connected_id, "Connection guard passed");

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

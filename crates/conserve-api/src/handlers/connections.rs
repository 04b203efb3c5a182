//! Connection handlers
//!
//! Endpoints for user-to-user connections.

use axum::{extract::State, Json};
use conserve_service::dto::{ConnectionResponse, CreateConnectionRequest};
use conserve_service::ConnectionService;

use crate::extractors::{ApiPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List connections a user initiated
///
/// GET /users/{user_id}/connections
pub async fn list_connections(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> ApiResult<Json<Vec<ConnectionResponse>>> {
    let service = ConnectionService::new(state.service_context());
    let response = service.list(user_id).await?;
    Ok(Json(response))
}

/// Connect a user to another user
///
/// POST /users/{user_id}/connections
pub async fn create_connection(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<CreateConnectionRequest>,
) -> ApiResult<Created<Json<ConnectionResponse>>> {
    let service = ConnectionService::new(state.service_context());
    let response = service.create(user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Remove a connection
///
/// DELETE /connections/{id}
pub async fn delete_connection(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<NoContent> {
    let service = ConnectionService::new(state.service_context());
    service.remove(id).await?;
    Ok(NoContent)
}

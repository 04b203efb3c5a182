//! Campaign handlers
//!
//! Endpoints for the campaign listing, campaign pages, and campaign writes.

use axum::{extract::State, Json};
use conserve_service::dto::{
    CampaignDetailResponse, CampaignResponse, CampaignWithCommentsResponse,
    CreateCampaignRequest, DeletedResponse, UpdateCampaignRequest,
};
use conserve_service::{CampaignService, ServiceError};

use crate::extractors::{ApiPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List campaigns with their comments
///
/// GET /campaigns
pub async fn list_campaigns(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CampaignWithCommentsResponse>>> {
    let service = CampaignService::new(state.service_context());
    let response = service.find_all().await?;
    Ok(Json(response))
}

/// Create a campaign
///
/// POST /campaigns
pub async fn create_campaign(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCampaignRequest>,
) -> ApiResult<Created<Json<CampaignDetailResponse>>> {
    let service = CampaignService::new(state.service_context());
    let response = service.insert(request).await?;
    Ok(Created(Json(response)))
}

/// Get a campaign with updates, comments and skilled impact requests
///
/// GET /campaigns/{id}
pub async fn get_campaign(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<CampaignDetailResponse>> {
    let service = CampaignService::new(state.service_context());
    let response = service.find_by_id_full(id).await?;
    Ok(Json(response))
}

/// Get a campaign with owner fields only
///
/// GET /campaigns/{id}/summary
pub async fn get_campaign_summary(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<CampaignResponse>> {
    let service = CampaignService::new(state.service_context());
    let response = service
        .find_one(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Campaign", id))?;
    Ok(Json(response))
}

/// Update a campaign
///
/// PUT /campaigns/{id}
pub async fn update_campaign(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<UpdateCampaignRequest>,
) -> ApiResult<Json<CampaignDetailResponse>> {
    let service = CampaignService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(Json(response))
}

/// Delete a campaign
///
/// DELETE /campaigns/{id}
pub async fn delete_campaign(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<DeletedResponse>> {
    let service = CampaignService::new(state.service_context());
    match service.remove(id).await? {
        0 => Err(ServiceError::not_found("Campaign", id).into()),
        deleted => Ok(Json(DeletedResponse { id: deleted })),
    }
}

//! User handlers
//!
//! Endpoints for user profiles and the campaigns a user owns.

use axum::{extract::State, Json};
use conserve_service::dto::{UserCampaignResponse, UserProfileResponse};
use conserve_service::{CampaignService, UserService};

use crate::extractors::ApiPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a user profile
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> ApiResult<Json<UserProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.find_user(user_id).await?;
    Ok(Json(response))
}

/// List a user's campaigns with updates and comments
///
/// GET /users/{user_id}/campaigns
pub async fn get_user_campaigns(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> ApiResult<Json<Vec<UserCampaignResponse>>> {
    let service = CampaignService::new(state.service_context());
    let response = service.find_by_user(user_id).await?;
    Ok(Json(response))
}

//! Report handlers
//!
//! Endpoints for filing and moderating abuse reports.

use axum::{extract::State, Json};
use conserve_service::dto::{CreateReportRequest, ReportResponse};
use conserve_service::ReportService;

use crate::extractors::{ApiPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List reports
///
/// GET /reports
pub async fn list_reports(State(state): State<AppState>) -> ApiResult<Json<Vec<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// File a report
///
/// POST /reports
pub async fn create_report(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateReportRequest>,
) -> ApiResult<Created<Json<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Get a report
///
/// GET /reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<ReportResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.find(id).await?;
    Ok(Json(response))
}

/// Dismiss a report
///
/// DELETE /reports/{id}
pub async fn delete_report(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<NoContent> {
    let service = ReportService::new(state.service_context());
    service.remove(id).await?;
    Ok(NoContent)
}

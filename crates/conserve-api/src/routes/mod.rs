//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    handler::Handler,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{campaigns, connections, health, reports, users};
use crate::middleware::connection_guard;
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes(state))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(campaign_routes())
        .merge(user_routes(state))
        .merge(connection_routes())
        .merge(report_routes())
}

/// Campaign routes
fn campaign_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/campaigns",
            get(campaigns::list_campaigns).post(campaigns::create_campaign),
        )
        .route(
            "/campaigns/:id",
            get(campaigns::get_campaign)
                .put(campaigns::update_campaign)
                .delete(campaigns::delete_campaign),
        )
        .route("/campaigns/:id/summary", get(campaigns::get_campaign_summary))
}

/// User routes; creating a connection passes through the duplicate guard first
fn user_routes(state: &AppState) -> Router<AppState> {
    let guarded_create = connections::create_connection
        .layer(from_fn_with_state(state.clone(), connection_guard));

    Router::new()
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/campaigns", get(users::get_user_campaigns))
        .route(
            "/users/:user_id/connections",
            get(connections::list_connections).merge(post(guarded_create)),
        )
}

/// Connection routes
fn connection_routes() -> Router<AppState> {
    Router::new().route("/connections/:id", delete(connections::delete_connection))
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reports",
            get(reports::list_reports).post(reports::create_report),
        )
        .route(
            "/reports/:id",
            get(reports::get_report).delete(reports::delete_report),
        )
}

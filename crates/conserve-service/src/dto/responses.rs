//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Campaign
//! payloads are flat: owner fields sit next to the campaign columns and the
//! nested collections are added alongside.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Campaign Responses
// ============================================================================

/// Campaign with owner profile image, location and organization name
#[derive(Debug, Clone, Serialize)]
pub struct CampaignResponse {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub call_to_action: Option<String>,
    pub urgency: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub org_name: Option<String>,
}

/// Listing entry: campaign plus its visible comments
#[derive(Debug, Clone, Serialize)]
pub struct CampaignWithCommentsResponse {
    #[serde(flatten)]
    pub campaign: CampaignResponse,
    pub comments: Vec<CommentResponse>,
}

/// Full campaign page
#[derive(Debug, Clone, Serialize)]
pub struct CampaignDetailResponse {
    #[serde(flatten)]
    pub campaign: CampaignResponse,
    pub updates: Vec<CampaignUpdateResponse>,
    pub comments: Vec<CommentResponse>,
    pub skilled_impact_requests: Vec<SkilledImpactRequestResponse>,
}

/// Campaign as listed on its owner's profile
#[derive(Debug, Clone, Serialize)]
pub struct UserCampaignResponse {
    #[serde(flatten)]
    pub campaign: CampaignResponse,
    pub updates: Vec<CampaignUpdateResponse>,
    pub comments: Vec<CommentResponse>,
}

/// Comment with its author's resolved display name
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: i32,
    pub campaign_id: i32,
    pub user_id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub profile_image: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignUpdateResponse {
    pub id: i32,
    pub campaign_id: i32,
    pub user_id: i32,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkilledImpactRequestResponse {
    pub id: i32,
    pub campaign_id: i32,
    pub skill: String,
    pub point_of_contact: Option<String>,
    pub welcome_message: Option<String>,
    pub our_contribution: Option<String>,
}

/// Body returned after a delete that reports the removed id
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeletedResponse {
    pub id: i32,
}

// ============================================================================
// User Responses
// ============================================================================

/// User with the name taken from its supporter or organization profile
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    pub id: i32,
    pub email: String,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>,
    pub is_deactivated: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Connection Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionResponse {
    pub id: i32,
    pub user_id: i32,
    pub connected_id: i32,
    /// `pending` or `connected`
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Report Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: i32,
    pub reported_by: i32,
    pub post_id: i32,
    pub table_name: String,
    pub report_desc: Option<String>,
    pub reported_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

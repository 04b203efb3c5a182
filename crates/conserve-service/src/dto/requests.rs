//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::{Deserialize, Deserializer};
use validator::Validate;

// ============================================================================
// Campaign Requests
// ============================================================================

/// Create campaign request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCampaignRequest {
    /// Owning user
    #[validate(range(min = 1, message = "user_id must be a positive id"))]
    pub user_id: i32,

    #[validate(length(min = 1, max = 255, message = "Campaign name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    /// Image URL
    pub image: Option<String>,

    pub call_to_action: Option<String>,

    #[validate(length(max = 64, message = "Urgency must be at most 64 characters"))]
    pub urgency: Option<String>,
}

/// Update campaign request
///
/// Omitted fields are left unchanged; an explicit `null` clears a nullable field.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCampaignRequest {
    #[validate(length(min = 1, max = 255, message = "Campaign name must be 1-255 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub call_to_action: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 64, message = "Urgency must be at most 64 characters"))]
    pub urgency: Option<Option<String>>,
}

/// Mark a field that appeared in the body, `null` included
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Connection Requests
// ============================================================================

/// Create connection request; the initiating user comes from the path
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct CreateConnectionRequest {
    #[validate(range(min = 1, message = "connected_id must be a positive id"))]
    pub connected_id: i32,
}

// ============================================================================
// Report Requests
// ============================================================================

/// File a report against a campaign, comment, campaign update, or user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportRequest {
    #[validate(range(min = 1, message = "reported_by must be a positive id"))]
    pub reported_by: i32,

    #[validate(range(min = 0, message = "post_id must not be negative"))]
    pub post_id: i32,

    /// One of `campaigns`, `comments`, `campaign_updates`, `users`
    pub table_name: String,

    #[validate(length(max = 255, message = "Report description must be at most 255 characters"))]
    pub report_desc: Option<String>,
}

//! Test fixtures and data generators
//!
//! Users, organizations and comments have no API surface, so they are
//! seeded straight into PostgreSQL.

use anyhow::Result;
use conserve_db::PgPool;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{nanos}_{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Insert a user row and return its id
pub async fn seed_user(pool: &PgPool) -> Result<i32> {
    let email = format!("api_test_{}@example.com", unique_suffix());
    let id = sqlx::query_scalar("INSERT INTO users (email, location) VALUES ($1, 'Nairobi') RETURNING id")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

/// Insert a user with a conservationist profile
pub async fn seed_organization(pool: &PgPool, name: &str) -> Result<i32> {
    let id = seed_user(pool).await?;
    sqlx::query("INSERT INTO conservationists (user_id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(id)
}

/// Insert a user with a supporter profile
pub async fn seed_supporter(pool: &PgPool, name: &str) -> Result<i32> {
    let id = seed_user(pool).await?;
    sqlx::query("INSERT INTO supporters (user_id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(id)
}

/// Insert a comment on a campaign
pub async fn seed_comment(
    pool: &PgPool,
    campaign_id: i32,
    user_id: i32,
    body: &str,
    deactivated: bool,
) -> Result<i32> {
    let id = sqlx::query_scalar(
        "INSERT INTO comments (campaign_id, user_id, body, is_deactivated) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(campaign_id)
    .bind(user_id)
    .bind(body)
    .bind(deactivated)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Flip a user's deactivation flag
pub async fn deactivate_user(pool: &PgPool, user_id: i32) -> Result<()> {
    sqlx::query("UPDATE users SET is_deactivated = TRUE WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Create campaign request
#[derive(Debug, Serialize)]
pub struct CreateCampaignRequest {
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub urgency: Option<String>,
}

impl CreateCampaignRequest {
    pub fn unique(user_id: i32) -> Self {
        Self {
            user_id,
            name: format!("Save the wetlands {}", unique_suffix()),
            description: Some("Restore the delta".to_string()),
            urgency: Some("Urgent".to_string()),
        }
    }
}

/// Update campaign request
#[derive(Debug, Default, Serialize)]
pub struct UpdateCampaignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
}

/// Campaign response with owner fields
#[derive(Debug, Deserialize)]
pub struct CampaignResponse {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub urgency: Option<String>,
    pub location: Option<String>,
    pub org_name: Option<String>,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i32,
    pub user_id: i32,
    pub body: String,
    pub name: String,
}

/// Feed entry
#[derive(Debug, Deserialize)]
pub struct CampaignWithComments {
    #[serde(flatten)]
    pub campaign: CampaignResponse,
    pub comments: Vec<CommentResponse>,
}

/// Full campaign record
#[derive(Debug, Deserialize)]
pub struct CampaignDetail {
    #[serde(flatten)]
    pub campaign: CampaignResponse,
    pub updates: Vec<serde_json::Value>,
    pub comments: Vec<CommentResponse>,
    pub skilled_impact_requests: Vec<serde_json::Value>,
}

/// Campaign as listed for its owner
#[derive(Debug, Deserialize)]
pub struct UserCampaign {
    #[serde(flatten)]
    pub campaign: CampaignResponse,
    pub updates: Vec<serde_json::Value>,
    pub comments: Vec<CommentResponse>,
}

/// Deleted response
#[derive(Debug, Deserialize)]
pub struct DeletedResponse {
    pub id: i32,
}

/// Create connection request
#[derive(Debug, Serialize)]
pub struct CreateConnectionRequest {
    pub connected_id: i32,
}

/// Connection response
#[derive(Debug, Deserialize)]
pub struct ConnectionResponse {
    pub id: i32,
    pub user_id: i32,
    pub connected_id: i32,
    pub status: String,
}

/// Create report request
#[derive(Debug, Serialize)]
pub struct CreateReportRequest {
    pub reported_by: i32,
    pub post_id: i32,
    pub table_name: String,
    pub report_desc: Option<String>,
}

/// Report response
#[derive(Debug, Deserialize)]
pub struct ReportResponse {
    pub id: i32,
    pub reported_by: i32,
    pub post_id: i32,
    pub table_name: String,
    pub report_desc: Option<String>,
}

/// User profile response
#[derive(Debug, Deserialize)]
pub struct UserProfileResponse {
    pub id: i32,
    pub name: Option<String>,
    pub location: Option<String>,
}

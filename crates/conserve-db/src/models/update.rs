//! Campaign update database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for campaign_updates table
#[derive(Debug, Clone, FromRow)]
pub struct CampaignUpdateModel {
    pub id: i32,
    pub campaign_id: i32,
    pub user_id: i32,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

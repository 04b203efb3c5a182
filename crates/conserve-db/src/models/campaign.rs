//! Campaign database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for campaigns table
#[derive(Debug, Clone, FromRow)]
pub struct CampaignModel {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub call_to_action: Option<String>,
    pub urgency: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Campaign joined with `users` and an optional `conservationists` row
#[derive(Debug, Clone, FromRow)]
pub struct CampaignWithOwnerModel {
    #[sqlx(flatten)]
    pub campaign: CampaignModel,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub org_name: Option<String>,
    pub owner_deactivated: bool,
}

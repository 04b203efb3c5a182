//! Campaign update entity - progress posts on a campaign

use chrono::{DateTime, Utc};

/// Campaign update row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignUpdate {
    pub id: i32,
    pub campaign_id: i32,
    pub user_id: i32,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

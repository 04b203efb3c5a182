//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i32,
    pub campaign_id: i32,
    pub user_id: i32,
    pub body: String,
    pub is_deactivated: bool,
    pub created_at: DateTime<Utc>,
}

/// Comment joined with its author and the author's optional profiles
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthorModel {
    #[sqlx(flatten)]
    pub comment: CommentModel,
    pub profile_image: Option<String>,
    pub org_name: Option<String>,
    pub sup_name: Option<String>,
    pub author_deactivated: bool,
}

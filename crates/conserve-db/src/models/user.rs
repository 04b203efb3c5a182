//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i32,
    pub email: String,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub is_deactivated: bool,
    pub created_at: DateTime<Utc>,
}

/// User row with supporter and conservationist names joined
#[derive(Debug, Clone, FromRow)]
pub struct UserProfileModel {
    #[sqlx(flatten)]
    pub user: UserModel,
    pub sup_name: Option<String>,
    pub cons_name: Option<String>,
}

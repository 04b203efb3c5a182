//! Connection database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for connections table
#[derive(Debug, Clone, FromRow)]
pub struct ConnectionModel {
    pub id: i32,
    pub user_id: i32,
    pub connected_id: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

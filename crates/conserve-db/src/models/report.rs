//! Reported post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reported_posts table
#[derive(Debug, Clone, FromRow)]
pub struct ReportedPostModel {
    pub id: i32,
    pub reported_by: i32,
    pub post_id: i32,
    pub table_name: String,
    pub report_desc: Option<String>,
    pub reported_at: DateTime<Utc>,
}

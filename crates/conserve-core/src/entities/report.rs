//! Reported post entity - an abuse report filed by a user

use chrono::{DateTime, Utc};

use crate::value_objects::ReportedTable;

/// Maximum length of a report description (`VARCHAR(255)`)
pub const REPORT_DESC_MAX_LEN: usize = 255;

/// Reported post row
///
/// `post_id` is interpreted against `table_name`; the store does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedPost {
    pub id: i32,
    pub reported_by: i32,
    pub post_id: i32,
    pub table_name: ReportedTable,
    pub report_desc: Option<String>,
    pub reported_at: DateTime<Utc>,
}

/// Values for filing a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub reported_by: i32,
    pub post_id: i32,
    pub table_name: ReportedTable,
    pub report_desc: Option<String>,
}

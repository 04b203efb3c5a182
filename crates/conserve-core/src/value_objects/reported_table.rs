//! Reported table - the kind of record an abuse report points at
//!
//! Reports reference their target polymorphically through `(table_name, post_id)`
//! without a foreign key, so the set of accepted table names is closed here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Table holding a reported record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportedTable {
    Campaigns,
    Comments,
    CampaignUpdates,
    Users,
}

impl ReportedTable {
    /// All accepted table names
    pub const ALL: [Self; 4] = [
        Self::Campaigns,
        Self::Comments,
        Self::CampaignUpdates,
        Self::Users,
    ];

    /// Table name as stored in `reported_posts.table_name`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Campaigns => "campaigns",
            Self::Comments => "comments",
            Self::CampaignUpdates => "campaign_updates",
            Self::Users => "users",
        }
    }
}

/// Error when parsing an unknown table name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reported table: {0}")]
pub struct ReportedTableParseError(pub String);

impl FromStr for ReportedTable {
    type Err = ReportedTableParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|table| table.as_str() == s)
            .ok_or_else(|| ReportedTableParseError(s.to_string()))
    }
}

impl fmt::Display for ReportedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

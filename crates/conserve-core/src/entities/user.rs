//! User entity - an account on the platform

use chrono::{DateTime, Utc};

/// User account
///
/// Users are never removed; deactivation hides their campaigns and comments
/// at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub is_deactivated: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the account is active
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.is_deactivated
    }
}

/// User with the display name resolved from its profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user: User,
    pub name: Option<String>,
}

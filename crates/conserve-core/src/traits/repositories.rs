//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    CampaignChanges, CampaignRecord, CampaignUpdate, CampaignWithOwner, CommentWithAuthor,
    Connection, NewCampaign, NewConnection, NewReport, ReportedPost, User, UserProfile,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID, deactivated or not
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>>;

    /// Find user with organization and supporter names joined
    async fn find_profile(&self, id: i32) -> RepoResult<Option<UserProfile>>;

    /// List every user, including deactivated ones
    async fn find_all(&self) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Campaign Repository
// ============================================================================

#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// List all campaigns joined with owner and organization fields
    async fn find_all_with_owner(&self) -> RepoResult<Vec<CampaignWithOwner>>;

    /// Find one campaign joined with owner and organization fields
    async fn find_with_owner(&self, id: i32) -> RepoResult<Option<CampaignWithOwner>>;

    /// List campaigns owned by a user
    async fn find_by_user(&self, user_id: i32) -> RepoResult<Vec<CampaignWithOwner>>;

    /// Load a campaign with its updates, comments and skilled impact requests
    async fn find_record(&self, id: i32) -> RepoResult<Option<CampaignRecord>>;

    /// Insert a campaign and load its full record in the same transaction
    async fn create(&self, campaign: &NewCampaign) -> RepoResult<CampaignRecord>;

    /// Apply changes and reload the full record in the same transaction.
    ///
    /// Returns `None` when no row matched `id`.
    async fn update(&self, id: i32, changes: &CampaignChanges)
        -> RepoResult<Option<CampaignRecord>>;

    /// Delete a campaign, returning the number of rows removed
    async fn delete(&self, id: i32) -> RepoResult<u64>;
}

// ============================================================================
// Campaign Update Repository
// ============================================================================

#[async_trait]
pub trait CampaignUpdateRepository: Send + Sync {
    /// List updates posted on a campaign, oldest first
    async fn find_by_campaign(&self, campaign_id: i32) -> RepoResult<Vec<CampaignUpdate>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List every comment joined with author fields, deactivated ones included
    async fn find_all_with_author(&self) -> RepoResult<Vec<CommentWithAuthor>>;

    /// List comments on a campaign joined with author fields
    async fn find_by_campaign(&self, campaign_id: i32) -> RepoResult<Vec<CommentWithAuthor>>;
}

// ============================================================================
// Connection Repository
// ============================================================================

#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// List connections initiated by a user
    async fn find_by_user(&self, user_id: i32) -> RepoResult<Vec<Connection>>;

    /// Create a connection
    async fn create(&self, connection: &NewConnection) -> RepoResult<Connection>;

    /// Delete a connection
    async fn delete(&self, id: i32) -> RepoResult<()>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// List all reports, newest first
    async fn find_all(&self) -> RepoResult<Vec<ReportedPost>>;

    /// Find report by ID
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<ReportedPost>>;

    /// File a new report
    async fn create(&self, report: &NewReport) -> RepoResult<ReportedPost>;

    /// Dismiss a report
    async fn delete(&self, id: i32) -> RepoResult<()>;
}

//! # conserve-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! read-time aggregation rules for campaign views.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod aggregation;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use aggregation::{CampaignDetail, CampaignView, UserCampaign};
pub use entities::{
    Campaign, CampaignChanges, CampaignComment, CampaignOwner, CampaignRecord, CampaignUpdate,
    CampaignWithOwner, Comment, CommentWithAuthor, Connection, NewCampaign, NewConnection,
    NewReport, ReportedPost, SkilledImpactRequest, User, UserProfile,
};
pub use error::DomainError;
pub use traits::{
    CampaignRepository, CampaignUpdateRepository, CommentRepository, ConnectionRepository,
    RepoResult, ReportRepository, UserRepository,
};
pub use value_objects::{ConnectionStatus, ReportedTable, FALLBACK_DISPLAY_NAME};

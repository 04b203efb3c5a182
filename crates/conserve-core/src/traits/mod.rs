//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CampaignRepository, CampaignUpdateRepository, CommentRepository, ConnectionRepository,
    RepoResult, ReportRepository, UserRepository,
};

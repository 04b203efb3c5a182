//! Database models - SQLx-compatible structs for PostgreSQL tables

mod campaign;
mod comment;
mod connection;
mod report;
mod skilled_impact;
mod update;
mod user;

pub use campaign::{CampaignModel, CampaignWithOwnerModel};
pub use comment::{CommentModel, CommentWithAuthorModel};
pub use connection::ConnectionModel;
pub use report::ReportedPostModel;
pub use skilled_impact::SkilledImpactRequestModel;
pub use update::CampaignUpdateModel;
pub use user::{UserModel, UserProfileModel};

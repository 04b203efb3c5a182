//! Domain entities - core business objects

mod campaign;
mod comment;
mod connection;
mod report;
mod skilled_impact;
mod update;
mod user;

pub use campaign::{
    Campaign, CampaignChanges, CampaignOwner, CampaignRecord, CampaignWithOwner, NewCampaign,
};
pub use comment::{CampaignComment, Comment, CommentWithAuthor};
pub use connection::{Connection, NewConnection};
pub use report::{NewReport, ReportedPost, REPORT_DESC_MAX_LEN};
pub use skilled_impact::SkilledImpactRequest;
pub use update::CampaignUpdate;
pub use user::{User, UserProfile};

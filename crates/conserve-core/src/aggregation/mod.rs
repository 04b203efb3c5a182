//! Read-time aggregation of campaign views
//!
//! The store returns flat join rows; these functions merge them into the
//! nested views served to clients and apply the soft-delete rules:
//! - a comment is dropped when it or its author is deactivated
//! - a campaign is dropped from the listing when its owner is deactivated

mod feed;
mod views;

pub use feed::{attach_comments, build_campaign_feed, exclude_deactivated_owners, visible_comments};
pub use views::{CampaignDetail, CampaignView, UserCampaign};

//! Campaign listing assembly

use std::collections::{HashMap, HashSet};

use crate::entities::{CampaignComment, CampaignWithOwner, CommentWithAuthor, User};

use super::views::CampaignView;

/// Keep visible comments and resolve their display names, preserving order
pub fn visible_comments(comments: Vec<CommentWithAuthor>) -> Vec<CampaignComment> {
    comments
        .into_iter()
        .filter(CommentWithAuthor::is_visible)
        .map(CampaignComment::from)
        .collect()
}

/// Group visible comments under their campaigns.
///
/// Every campaign gets a comment list, empty when nothing matched. Comments
/// for campaigns not in `campaigns` are discarded.
pub fn attach_comments(
    campaigns: Vec<CampaignWithOwner>,
    comments: Vec<CommentWithAuthor>,
) -> Vec<CampaignView> {
    let mut by_campaign: HashMap<i32, Vec<CampaignComment>> = HashMap::new();
    for comment in visible_comments(comments) {
        by_campaign
            .entry(comment.comment.campaign_id)
            .or_default()
            .push(comment);
    }

    campaigns
        .into_iter()
        .map(|campaign| {
            let comments = by_campaign.remove(&campaign.id()).unwrap_or_default();
            CampaignView { campaign, comments }
        })
        .collect()
}

/// Drop campaigns whose owner is deactivated or missing from `users`
pub fn exclude_deactivated_owners(views: Vec<CampaignView>, users: &[User]) -> Vec<CampaignView> {
    let active: HashSet<i32> = users
        .iter()
        .filter(|user| user.is_active())
        .map(|user| user.id)
        .collect();

    views
        .into_iter()
        .filter(|view| active.contains(&view.campaign.owner_id()))
        .collect()
}

/// Build the campaign listing from the three listing queries
pub fn build_campaign_feed(
    campaigns: Vec<CampaignWithOwner>,
    comments: Vec<CommentWithAuthor>,
    users: &[User],
) -> Vec<CampaignView> {
    exclude_deactivated_owners(attach_comments(campaigns, comments), users)
}

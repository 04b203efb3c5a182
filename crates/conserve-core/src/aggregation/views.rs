//! Aggregated campaign views

use crate::entities::{
    CampaignComment, CampaignRecord, CampaignUpdate, CampaignWithOwner, SkilledImpactRequest,
};

use super::feed::visible_comments;

/// Campaign with its visible comments, as shown in the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignView {
    pub campaign: CampaignWithOwner,
    pub comments: Vec<CampaignComment>,
}

/// Campaign with every nested collection, as shown on its own page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDetail {
    pub campaign: CampaignWithOwner,
    pub updates: Vec<CampaignUpdate>,
    pub comments: Vec<CampaignComment>,
    pub skilled_impact_requests: Vec<SkilledImpactRequest>,
}

impl From<CampaignRecord> for CampaignDetail {
    fn from(record: CampaignRecord) -> Self {
        Self {
            campaign: record.campaign,
            updates: record.updates,
            comments: visible_comments(record.comments),
            skilled_impact_requests: record.skilled_impact_requests,
        }
    }
}

/// Campaign on a user's profile, with updates and visible comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCampaign {
    pub campaign: CampaignWithOwner,
    pub updates: Vec<CampaignUpdate>,
    pub comments: Vec<CampaignComment>,
}

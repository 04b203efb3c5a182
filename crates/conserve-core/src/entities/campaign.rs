//! Campaign entity - a fundraising or volunteering campaign owned by a user

use chrono::{DateTime, Utc};

use super::comment::CommentWithAuthor;
use super::skilled_impact::SkilledImpactRequest;
use super::update::CampaignUpdate;

/// Campaign row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub call_to_action: Option<String>,
    pub urgency: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Owner fields joined onto a campaign
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignOwner {
    pub profile_image: Option<String>,
    pub location: Option<String>,
    /// Name of the owner's organization profile, if any
    pub org_name: Option<String>,
    pub is_deactivated: bool,
}

/// Campaign joined with its owning user and organization profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignWithOwner {
    pub campaign: Campaign,
    pub owner: CampaignOwner,
}

impl CampaignWithOwner {
    #[inline]
    pub fn id(&self) -> i32 {
        self.campaign.id
    }

    #[inline]
    pub fn owner_id(&self) -> i32 {
        self.campaign.user_id
    }
}

/// Everything the store returns for a single campaign: the base record and
/// its three nested collections, before read-time filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRecord {
    pub campaign: CampaignWithOwner,
    pub updates: Vec<CampaignUpdate>,
    pub comments: Vec<CommentWithAuthor>,
    pub skilled_impact_requests: Vec<SkilledImpactRequest>,
}

/// Values for inserting a campaign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCampaign {
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub call_to_action: Option<String>,
    pub urgency: Option<String>,
}

/// Partial campaign update
///
/// `None` keeps the stored value. For the nullable columns `Some(None)`
/// clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub call_to_action: Option<Option<String>>,
    pub urgency: Option<Option<String>>,
}

impl CampaignChanges {
    /// Check if no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.call_to_action.is_none()
            && self.urgency.is_none()
    }
}

//! Campaign entity <-> model mapper

use conserve_core::entities::{
    Campaign, CampaignOwner, CampaignUpdate, CampaignWithOwner, SkilledImpactRequest,
};

use crate::models::{
    CampaignModel, CampaignUpdateModel, CampaignWithOwnerModel, SkilledImpactRequestModel,
};

impl From<CampaignModel> for Campaign {
    fn from(model: CampaignModel) -> Self {
        Campaign {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            description: model.description,
            image: model.image,
            call_to_action: model.call_to_action,
            urgency: model.urgency,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CampaignWithOwnerModel> for CampaignWithOwner {
    fn from(model: CampaignWithOwnerModel) -> Self {
        CampaignWithOwner {
            campaign: model.campaign.into(),
            owner: CampaignOwner {
                profile_image: model.profile_image,
                location: model.location,
                org_name: model.org_name,
                is_deactivated: model.owner_deactivated,
            },
        }
    }
}

impl From<CampaignUpdateModel> for CampaignUpdate {
    fn from(model: CampaignUpdateModel) -> Self {
        CampaignUpdate {
            id: model.id,
            campaign_id: model.campaign_id,
            user_id: model.user_id,
            description: model.description,
            image: model.image,
            created_at: model.created_at,
        }
    }
}

impl From<SkilledImpactRequestModel> for SkilledImpactRequest {
    fn from(model: SkilledImpactRequestModel) -> Self {
        SkilledImpactRequest {
            id: model.id,
            campaign_id: model.campaign_id,
            skill: model.skill,
            point_of_contact: model.point_of_contact,
            welcome_message: model.welcome_message,
            our_contribution: model.our_contribution,
        }
    }
}

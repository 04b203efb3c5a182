//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs and
//! from request DTOs to the domain's write types.

use conserve_core::entities::{
    CampaignChanges, CampaignComment, CampaignUpdate, CampaignWithOwner, Connection, NewCampaign,
    ReportedPost, SkilledImpactRequest, UserProfile,
};
use conserve_core::{CampaignDetail, CampaignView, UserCampaign};

use super::requests::{CreateCampaignRequest, UpdateCampaignRequest};
use super::responses::{
    CampaignDetailResponse, CampaignResponse, CampaignUpdateResponse,
    CampaignWithCommentsResponse, CommentResponse, ConnectionResponse, ReportResponse,
    SkilledImpactRequestResponse, UserCampaignResponse, UserProfileResponse,
};

// ============================================================================
// Campaign Mappers
// ============================================================================

impl From<CampaignWithOwner> for CampaignResponse {
    fn from(row: CampaignWithOwner) -> Self {
        let CampaignWithOwner { campaign, owner } = row;
        Self {
            id: campaign.id,
            user_id: campaign.user_id,
            name: campaign.name,
            description: campaign.description,
            image: campaign.image,
            call_to_action: campaign.call_to_action,
            urgency: campaign.urgency,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
            profile_image: owner.profile_image,
            location: owner.location,
            org_name: owner.org_name,
        }
    }
}

impl From<CampaignComment> for CommentResponse {
    fn from(row: CampaignComment) -> Self {
        Self {
            id: row.comment.id,
            campaign_id: row.comment.campaign_id,
            user_id: row.comment.user_id,
            body: row.comment.body,
            created_at: row.comment.created_at,
            profile_image: row.profile_image,
            name: row.name,
        }
    }
}

impl From<CampaignUpdate> for CampaignUpdateResponse {
    fn from(update: CampaignUpdate) -> Self {
        Self {
            id: update.id,
            campaign_id: update.campaign_id,
            user_id: update.user_id,
            description: update.description,
            image: update.image,
            created_at: update.created_at,
        }
    }
}

impl From<SkilledImpactRequest> for SkilledImpactRequestResponse {
    fn from(request: SkilledImpactRequest) -> Self {
        Self {
            id: request.id,
            campaign_id: request.campaign_id,
            skill: request.skill,
            point_of_contact: request.point_of_contact,
            welcome_message: request.welcome_message,
            our_contribution: request.our_contribution,
        }
    }
}

fn map_all<T, U: From<T>>(items: Vec<T>) -> Vec<U> {
    items.into_iter().map(U::from).collect()
}

impl From<CampaignView> for CampaignWithCommentsResponse {
    fn from(view: CampaignView) -> Self {
        Self {
            campaign: view.campaign.into(),
            comments: map_all(view.comments),
        }
    }
}

impl From<CampaignDetail> for CampaignDetailResponse {
    fn from(detail: CampaignDetail) -> Self {
        Self {
            campaign: detail.campaign.into(),
            updates: map_all(detail.updates),
            comments: map_all(detail.comments),
            skilled_impact_requests: map_all(detail.skilled_impact_requests),
        }
    }
}

impl From<UserCampaign> for UserCampaignResponse {
    fn from(entry: UserCampaign) -> Self {
        Self {
            campaign: entry.campaign.into(),
            updates: map_all(entry.updates),
            comments: map_all(entry.comments),
        }
    }
}

impl From<CreateCampaignRequest> for NewCampaign {
    fn from(request: CreateCampaignRequest) -> Self {
        Self {
            user_id: request.user_id,
            name: request.name,
            description: request.description,
            image: request.image,
            call_to_action: request.call_to_action,
            urgency: request.urgency,
        }
    }
}

impl From<UpdateCampaignRequest> for CampaignChanges {
    fn from(request: UpdateCampaignRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            image: request.image,
            call_to_action: request.call_to_action,
            urgency: request.urgency,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let UserProfile { user, name } = profile;
        Self {
            id: user.id,
            email: user.email,
            profile_image: user.profile_image,
            location: user.location,
            name,
            is_deactivated: user.is_deactivated,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Connection & Report Mappers
// ============================================================================

impl From<Connection> for ConnectionResponse {
    fn from(conn: Connection) -> Self {
        Self {
            id: conn.id,
            user_id: conn.user_id,
            connected_id: conn.connected_id,
            status: conn.status.to_string(),
            created_at: conn.created_at,
        }
    }
}

impl From<ReportedPost> for ReportResponse {
    fn from(report: ReportedPost) -> Self {
        Self {
            id: report.id,
            reported_by: report.reported_by,
            post_id: report.post_id,
            table_name: report.table_name.to_string(),
            report_desc: report.report_desc,
            reported_at: report.reported_at,
        }
    }
}

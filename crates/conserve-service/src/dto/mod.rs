//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers between domain entities and DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCampaignRequest, CreateConnectionRequest, CreateReportRequest, UpdateCampaignRequest,
};

pub use responses::{
    CampaignDetailResponse, CampaignResponse, CampaignUpdateResponse,
    CampaignWithCommentsResponse, CommentResponse, ConnectionResponse, DeletedResponse,
    HealthChecks, HealthResponse, ReadinessResponse, ReportResponse, SkilledImpactRequestResponse,
    UserCampaignResponse, UserProfileResponse,
};

//! # conserve-service
//!
//! Application layer containing the campaign aggregator, the connection
//! guard, report intake, and the DTOs exchanged with the API layer.

pub mod dto;
pub mod services;

pub use services::{
    CampaignService, ConnectionService, ReportService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};

//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod campaign;
pub mod connection;
pub mod context;
pub mod error;
pub mod report;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use campaign::CampaignService;
pub use connection::ConnectionService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use report::ReportService;
pub use user::UserService;

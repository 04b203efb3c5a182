//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in conserve-core.
//! Each repository handles database operations for a specific domain entity.

mod campaign;
mod comment;
mod connection;
mod error;
mod report;
mod update;
mod user;

pub use campaign::PgCampaignRepository;
pub use comment::PgCommentRepository;
pub use connection::PgConnectionRepository;
pub use report::PgReportRepository;
pub use update::PgCampaignUpdateRepository;
pub use user::PgUserRepository;

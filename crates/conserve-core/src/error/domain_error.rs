//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Boxed cause carried by infrastructure errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i32),

    #[error("Campaign not found: {0}")]
    CampaignNotFound(i32),

    #[error("Connection not found: {0}")]
    ConnectionNotFound(i32),

    #[error("Report not found: {0}")]
    ReportNotFound(i32),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown reported table: {0}")]
    UnknownReportedTable(String),

    #[error("Cannot connect a user to themselves")]
    SelfConnection,

    // =========================================================================
    // Rejected Operations
    // =========================================================================
    #[error("Users are already connected")]
    AlreadyConnected,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(#[source] BoxError),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CampaignNotFound(_) => "UNKNOWN_CAMPAIGN",
            Self::ConnectionNotFound(_) => "UNKNOWN_CONNECTION",
            Self::ReportNotFound(_) => "UNKNOWN_REPORT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UnknownReportedTable(_) => "UNKNOWN_REPORTED_TABLE",
            Self::SelfConnection => "SELF_CONNECTION",

            // Rejected
            Self::AlreadyConnected => "ALREADY_CONNECTED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::CampaignNotFound(_)
                | Self::ConnectionNotFound(_)
                | Self::ReportNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::UnknownReportedTable(_) | Self::SelfConnection
        )
    }

    /// Check if the operation was refused by a domain guard (HTTP 403)
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::AlreadyConnected)
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_forbidden() {
            403
        } else if self.is_validation() {
            400
        } else {
            500
        }
    }
}

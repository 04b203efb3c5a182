//! Service context - dependency container for services
//!
//! Holds the connection pool and every repository the services need.

use std::sync::Arc;

use conserve_core::traits::{
    CampaignRepository, CampaignUpdateRepository, CommentRepository, ConnectionRepository,
    ReportRepository, UserRepository,
};
use conserve_db::{
    PgCampaignRepository, PgCampaignUpdateRepository, PgCommentRepository,
    PgConnectionRepository, PgPool, PgReportRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Passed by reference to every service; repositories are trait objects so
/// tests can swap in in-memory implementations.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    campaign_repo: Arc<dyn CampaignRepository>,
    update_repo: Arc<dyn CampaignUpdateRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    connection_repo: Arc<dyn ConnectionRepository>,
    report_repo: Arc<dyn ReportRepository>,
}

impl ServiceContext {
    /// Create a context backed by the PostgreSQL repositories
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            campaign_repo: Arc::new(PgCampaignRepository::new(pool.clone())),
            update_repo: Arc::new(PgCampaignUpdateRepository::new(pool.clone())),
            comment_repo: Arc::new(PgCommentRepository::new(pool.clone())),
            connection_repo: Arc::new(PgConnectionRepository::new(pool.clone())),
            report_repo: Arc::new(PgReportRepository::new(pool.clone())),
            pool,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the campaign repository
    pub fn campaign_repo(&self) -> &dyn CampaignRepository {
        self.campaign_repo.as_ref()
    }

    /// Get the campaign update repository
    pub fn update_repo(&self) -> &dyn CampaignUpdateRepository {
        self.update_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the connection repository
    pub fn connection_repo(&self) -> &dyn ConnectionRepository {
        self.connection_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    campaign_repo: Option<Arc<dyn CampaignRepository>>,
    update_repo: Option<Arc<dyn CampaignUpdateRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    connection_repo: Option<Arc<dyn ConnectionRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn campaign_repo(mut self, repo: Arc<dyn CampaignRepository>) -> Self {
        self.campaign_repo = Some(repo);
        self
    }

    pub fn update_repo(mut self, repo: Arc<dyn CampaignUpdateRepository>) -> Self {
        self.update_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn connection_repo(mut self, repo: Arc<dyn ConnectionRepository>) -> Self {
        self.connection_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// Repositories that were not set default to the PostgreSQL ones.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if no pool was provided
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::validation("pool is required"))?;
        let defaults = ServiceContext::from_pool(pool);

        Ok(ServiceContext {
            user_repo: self.user_repo.unwrap_or(defaults.user_repo),
            campaign_repo: self.campaign_repo.unwrap_or(defaults.campaign_repo),
            update_repo: self.update_repo.unwrap_or(defaults.update_repo),
            comment_repo: self.comment_repo.unwrap_or(defaults.comment_repo),
            connection_repo: self.connection_repo.unwrap_or(defaults.connection_repo),
            report_repo: self.report_repo.unwrap_or(defaults.report_repo),
            pool: defaults.pool,
        })
    }
}

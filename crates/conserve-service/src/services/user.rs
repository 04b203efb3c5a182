//! User service

use tracing::instrument;

use crate::dto::UserProfileResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user with its display name (supporter name first, then organization)
    #[instrument(skip(self))]
    pub async fn find_user(&self, id: i32) -> ServiceResult<UserProfileResponse> {
        let profile = self
            .ctx
            .user_repo()
            .find_profile(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        Ok(profile.into())
    }
}

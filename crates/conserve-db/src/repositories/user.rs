//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use conserve_core::entities::{User, UserProfile};
use conserve_core::traits::{RepoResult, UserRepository};

use crate::models::{UserModel, UserProfileModel};

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, profile_image, location, is_deactivated, created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_profile(&self, id: i32) -> RepoResult<Option<UserProfile>> {
        let result = sqlx::query_as::<_, UserProfileModel>(
            r"
            SELECT u.id, u.email, u.profile_image, u.location, u.is_deactivated, u.created_at,
                   s.name AS sup_name, o.name AS cons_name
            FROM users u
            LEFT JOIN supporters s ON s.user_id = u.id
            LEFT JOIN conservationists o ON o.user_id = u.id
            WHERE u.id = $1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserProfile::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, profile_image, location, is_deactivated, created_at
            FROM users
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }
}

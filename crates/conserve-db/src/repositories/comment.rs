//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres};
use tracing::instrument;

use conserve_core::entities::CommentWithAuthor;
use conserve_core::traits::{CommentRepository, RepoResult};

use crate::models::CommentWithAuthorModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Comments on one campaign with author fields, oldest first.
///
/// Shared with the campaign repository so the same query can run inside a transaction.
pub(super) async fn fetch_by_campaign<'e, E>(
    executor: E,
    campaign_id: i32,
) -> RepoResult<Vec<CommentWithAuthor>>
where
    E: Executor<'e, Database = Postgres>,
{
    let results = sqlx::query_as::<_, CommentWithAuthorModel>(
        r"
        SELECT cm.id, cm.campaign_id, cm.user_id, cm.body, cm.is_deactivated, cm.created_at,
               u.profile_image, o.name AS org_name, s.name AS sup_name,
               u.is_deactivated AS author_deactivated
        FROM comments cm
        JOIN users u ON u.id = cm.user_id
        LEFT JOIN conservationists o ON o.user_id = cm.user_id
        LEFT JOIN supporters s ON s.user_id = cm.user_id
        WHERE cm.campaign_id = $1
        ORDER BY cm.created_at, cm.id
        ",
    )
    .bind(campaign_id)
    .fetch_all(executor)
    .await
    .map_err(map_db_error)?;

    Ok(results.into_iter().map(CommentWithAuthor::from).collect())
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_all_with_author(&self) -> RepoResult<Vec<CommentWithAuthor>> {
        let results = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT cm.id, cm.campaign_id, cm.user_id, cm.body, cm.is_deactivated, cm.created_at,
                   u.profile_image, o.name AS org_name, s.name AS sup_name,
                   u.is_deactivated AS author_deactivated
            FROM comments cm
            JOIN users u ON u.id = cm.user_id
            LEFT JOIN conservationists o ON o.user_id = cm.user_id
            LEFT JOIN supporters s ON s.user_id = cm.user_id
            ORDER BY cm.created_at, cm.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentWithAuthor::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_campaign(&self, campaign_id: i32) -> RepoResult<Vec<CommentWithAuthor>> {
        fetch_by_campaign(&self.pool, campaign_id).await
    }
}

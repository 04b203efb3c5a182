//! PostgreSQL implementation of ReportRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use conserve_core::entities::{NewReport, ReportedPost};
use conserve_core::error::DomainError;
use conserve_core::traits::{RepoResult, ReportRepository};

use crate::models::ReportedPostModel;

use super::error::{map_db_error, map_foreign_key_violation, report_not_found};

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ReportedPost>> {
        let results = sqlx::query_as::<_, ReportedPostModel>(
            r"
            SELECT id, reported_by, post_id, table_name, report_desc, reported_at
            FROM reported_posts
            ORDER BY reported_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(ReportedPost::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<ReportedPost>> {
        let result = sqlx::query_as::<_, ReportedPostModel>(
            r"
            SELECT id, reported_by, post_id, table_name, report_desc, reported_at
            FROM reported_posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ReportedPost::try_from).transpose()
    }

    #[instrument(skip(self, report), fields(reported_by = report.reported_by, table = %report.table_name))]
    async fn create(&self, report: &NewReport) -> RepoResult<ReportedPost> {
        let result = sqlx::query_as::<_, ReportedPostModel>(
            r"
            INSERT INTO reported_posts (reported_by, post_id, table_name, report_desc)
            VALUES ($1, $2, $3, $4)
            RETURNING id, reported_by, post_id, table_name, report_desc, reported_at
            ",
        )
        .bind(report.reported_by)
        .bind(report.post_id)
        .bind(report.table_name.as_str())
        .bind(&report.report_desc)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, |_| DomainError::UserNotFound(report.reported_by)))?;

        ReportedPost::try_from(result)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM reported_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_not_found(id));
        }

        Ok(())
    }
}

//! PostgreSQL implementation of ConnectionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use conserve_core::entities::{Connection, NewConnection};
use conserve_core::error::DomainError;
use conserve_core::traits::{ConnectionRepository, RepoResult};

use crate::models::ConnectionModel;

use super::error::{connection_not_found, map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ConnectionRepository
#[derive(Clone)]
pub struct PgConnectionRepository {
    pool: PgPool,
}

impl PgConnectionRepository {
    /// Create a new PgConnectionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionRepository for PgConnectionRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i32) -> RepoResult<Vec<Connection>> {
        let results = sqlx::query_as::<_, ConnectionModel>(
            r"
            SELECT id, user_id, connected_id, status, created_at
            FROM connections
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Connection::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, connection: &NewConnection) -> RepoResult<Connection> {
        let result = sqlx::query_as::<_, ConnectionModel>(
            r"
            INSERT INTO connections (user_id, connected_id, status)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, connected_id, status, created_at
            ",
        )
        .bind(connection.user_id)
        .bind(connection.connected_id)
        .bind(connection.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |constraint| match constraint {
                Some("connections_connected_id_fkey") => {
                    DomainError::UserNotFound(connection.connected_id)
                }
                _ => DomainError::UserNotFound(connection.user_id),
            })
        })?;

        Connection::try_from(result)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM connections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(connection_not_found(id));
        }

        Ok(())
    }
}

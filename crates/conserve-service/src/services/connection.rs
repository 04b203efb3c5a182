//! Connection service
//!
//! Creates and removes user-to-user connections, and hosts the guard that
//! keeps a user from connecting to the same person twice.

use tracing::{info, instrument};

use conserve_core::entities::NewConnection;
use conserve_core::DomainError;

use crate::dto::{ConnectionResponse, CreateConnectionRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Connection service
pub struct ConnectionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConnectionService<'a> {
    /// Create a new ConnectionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reject the request when `user_id` already has a connection to `connected_id`.
    ///
    /// Only connections initiated by `user_id` are considered: an existing
    /// B -> A connection does not block A -> B.
    #[instrument(skip(self))]
    pub async fn check_connection(&self, user_id: i32, connected_id: i32) -> ServiceResult<()> {
        let connections = self.ctx.connection_repo().find_by_user(user_id).await?;

        if connections.iter().any(|conn| conn.targets(connected_id)) {
            info!(user_id, connected_id, "Duplicate connection rejected");
            return Err(DomainError::AlreadyConnected.into());
        }

        Ok(())
    }

    /// List connections initiated by a user, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: i32) -> ServiceResult<Vec<ConnectionResponse>> {
        let connections = self.ctx.connection_repo().find_by_user(user_id).await?;
        Ok(connections.into_iter().map(ConnectionResponse::from).collect())
    }

    /// Create a pending connection from `user_id` to the requested user
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        user_id: i32,
        request: CreateConnectionRequest,
    ) -> ServiceResult<ConnectionResponse> {
        let connection = NewConnection::pending(user_id, request.connected_id);
        if connection.is_self() {
            return Err(DomainError::SelfConnection.into());
        }

        self.check_connection(user_id, request.connected_id).await?;

        let created = self.ctx.connection_repo().create(&connection).await?;
        info!(connection_id = created.id, user_id, connected_id = created.connected_id, "Connection created");

        Ok(created.into())
    }

    /// Delete a connection
    #[instrument(skip(self))]
    pub async fn remove(&self, id: i32) -> ServiceResult<()> {
        self.ctx.connection_repo().delete(id).await?;
        info!(connection_id = id, "Connection removed");
        Ok(())
    }
}

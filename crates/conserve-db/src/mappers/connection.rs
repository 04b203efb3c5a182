//! Connection entity <-> model mapper

use conserve_core::entities::Connection;
use conserve_core::error::DomainError;
use conserve_core::value_objects::ConnectionStatus;

use crate::models::ConnectionModel;

impl TryFrom<ConnectionModel> for Connection {
    type Error = DomainError;

    fn try_from(model: ConnectionModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<ConnectionStatus>()
            .map_err(DomainError::InternalError)?;

        Ok(Connection {
            id: model.id,
            user_id: model.user_id,
            connected_id: model.connected_id,
            status,
            created_at: model.created_at,
        })
    }
}

//! Connection entity - a directed link from one user to another

use chrono::{DateTime, Utc};

use crate::value_objects::ConnectionStatus;

/// Connection row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: i32,
    pub user_id: i32,
    pub connected_id: i32,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
}

impl Connection {
    /// Check if this connection points at the given user
    #[inline]
    pub fn targets(&self, user_id: i32) -> bool {
        self.connected_id == user_id
    }
}

/// Values for inserting a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewConnection {
    pub user_id: i32,
    pub connected_id: i32,
    pub status: ConnectionStatus,
}

impl NewConnection {
    /// Create a pending connection request
    pub fn pending(user_id: i32, connected_id: i32) -> Self {
        Self {
            user_id,
            connected_id,
            status: ConnectionStatus::Pending,
        }
    }

    /// Check if the connection would point back at its own user
    #[inline]
    pub fn is_self(&self) -> bool {
        self.user_id == self.connected_id
    }
}

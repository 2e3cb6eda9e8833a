//! Room record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A room as returned to callers.
///
/// The identifier is assigned by the backing store: a serial integer
/// rendered as a string for the relational backend, a store-generated key
/// for the document backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Store-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current member count (document backend only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<i64>,
    /// Creation timestamp (relational backend only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp (relational backend only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Room {
    /// Create a room with just an identity and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            members: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Payload for creating a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRoom {
    pub name: String,
}

/// Partial update for a room. Fields left as `None` are not touched by the
/// store; they are never zeroed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<i64>,
}

impl RoomPatch {
    /// Whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.members.is_none()
    }
}

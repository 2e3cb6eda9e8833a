//! Room store trait.

use async_trait::async_trait;

use crate::error::AtriumResult;
use crate::types::{NewRoom, Room, RoomPatch};

/// Room resource manager contract. One trait, two interchangeable backends
/// (relational and document), selected by deployment configuration.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Persist a new room, returning its assigned identifier.
    async fn create(&self, room: NewRoom) -> AtriumResult<String>;

    /// Fetch a room by identifier.
    async fn get(&self, id: &str) -> AtriumResult<Room>;

    /// Apply a partial update. The existing record is read first; a miss is
    /// a not-found fault, and fields absent from the patch keep their prior
    /// values.
    async fn update(&self, id: &str, patch: RoomPatch) -> AtriumResult<()>;

    /// Delete a room. Reports not-found when the store affected zero
    /// records, never success.
    async fn delete(&self, id: &str) -> AtriumResult<()>;
}

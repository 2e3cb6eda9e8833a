//! Document room store backed by a graph store vertex collection.
//!
//! Rooms live as vertices in the `Rooms` collection, so the relationship
//! connector can resolve them directly as edge endpoints. Keys are assigned
//! by the graph store.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use atrium_core::error::{AtriumError, AtriumResult};
use atrium_core::graph::ROOMS_COLLECTION;
use atrium_core::traits::{GraphStore, RoomStore};
use atrium_core::types::{NewRoom, Room, RoomPatch};

/// Document room store implementation.
pub struct DocumentRoomStore {
    store: Arc<dyn GraphStore>,
}

#[derive(Debug, Deserialize)]
struct RoomDocument {
    name: String,
    members: Option<i64>,
}

impl DocumentRoomStore {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    fn require_key(id: &str) -> AtriumResult<()> {
        if id.is_empty() {
            return Err(AtriumError::invalid_identifier(id));
        }
        Ok(())
    }
}

#[async_trait]
impl RoomStore for DocumentRoomStore {
    async fn create(&self, room: NewRoom) -> AtriumResult<String> {
        let meta = self
            .store
            .insert_vertex(ROOMS_COLLECTION, json!({"name": room.name, "members": 0}))
            .await?;
        Ok(meta.key)
    }

    async fn get(&self, id: &str) -> AtriumResult<Room> {
        Self::require_key(id)?;

        let (meta, document) = self
            .store
            .read_vertex(ROOMS_COLLECTION, id)
            .await?
            .ok_or_else(|| AtriumError::room_not_found(id))?;

        let document: RoomDocument = serde_json::from_value(document)?;
        Ok(Room {
            id: meta.key,
            name: document.name,
            members: document.members,
            created_at: None,
            updated_at: None,
        })
    }

    async fn update(&self, id: &str, patch: RoomPatch) -> AtriumResult<()> {
        Self::require_key(id)?;

        // Read first so a miss is reported as such rather than as a no-op
        // update.
        self.store
            .read_vertex(ROOMS_COLLECTION, id)
            .await?
            .ok_or_else(|| AtriumError::room_not_found(id))?;

        if patch.is_empty() {
            return Ok(());
        }

        // RoomPatch serializes only its present fields, so absent ones are
        // never sent to the store and keep their prior values.
        self.store
            .update_vertex(ROOMS_COLLECTION, id, serde_json::to_value(&patch)?)
            .await?
            .ok_or_else(|| AtriumError::room_not_found(id))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> AtriumResult<()> {
        Self::require_key(id)?;

        if !self.store.remove_vertex(ROOMS_COLLECTION, id).await? {
            return Err(AtriumError::room_not_found(id));
        }
        Ok(())
    }
}

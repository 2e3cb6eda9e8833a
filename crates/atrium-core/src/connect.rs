//! Connecting users to rooms as directed graph edges.

use std::sync::Arc;

use tracing::debug;

use crate::error::{AtriumError, AtriumResult};
use crate::graph::{ROOMS_COLLECTION, USERS_COLLECTION};
use crate::traits::{GraphStore, NamedGraph};
use crate::types::{Connection, EdgeDocument};

/// Resolves both endpoints of a connection and inserts the edge.
pub struct RoomConnector {
    store: Arc<dyn GraphStore>,
    graph: NamedGraph,
}

impl RoomConnector {
    pub fn new(store: Arc<dyn GraphStore>, graph: NamedGraph) -> Self {
        Self { store, graph }
    }

    /// Connect a user to a room by inserting a directed edge from the user
    /// vertex to the room vertex.
    ///
    /// The room is resolved before the user, so a request with both
    /// endpoints missing deterministically reports the room. Resolution has
    /// no side effects; only the final insert mutates the store, and its
    /// failure is terminal. Repeated connects for the same pair insert
    /// additional edges.
    pub async fn connect(&self, room_id: &str, user_id: &str) -> AtriumResult<Connection> {
        if room_id.is_empty() {
            return Err(AtriumError::validation("room identifier must not be empty"));
        }
        if user_id.is_empty() {
            return Err(AtriumError::validation("user identifier must not be empty"));
        }

        let (room, _) = self
            .store
            .read_vertex(ROOMS_COLLECTION, room_id)
            .await?
            .ok_or_else(|| AtriumError::room_not_found(room_id))?;

        let (user, _) = self
            .store
            .read_vertex(USERS_COLLECTION, user_id)
            .await?
            .ok_or_else(|| AtriumError::user_not_found(user_id))?;

        let edge = EdgeDocument {
            from: user.id.clone(),
            to: room.id,
        };
        let meta = self
            .store
            .insert_edge(self.graph.edge_collection(), &edge)
            .await?;
        debug!(edge = %meta.id, user = %user.id, "connected user to room");

        Ok(Connection {
            edge_id: meta.id,
            user_id: user.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use serde_json::json;

    use super::*;
    use crate::error::Subject;
    use crate::graph::ensure_default_graph;
    use crate::test_support::FakeGraphStore;

    async fn connector_with(store: Arc<FakeGraphStore>) -> RoomConnector {
        let graph = ensure_default_graph(store.as_ref(), "parties").await.unwrap();
        RoomConnector::new(store, graph)
    }

    #[tokio::test]
    async fn connect_inserts_edge_from_user_to_room() {
        let store = Arc::new(FakeGraphStore::new());
        store.seed_vertex(ROOMS_COLLECTION, "r1", json!({"name": "Party"}));
        store.seed_vertex(USERS_COLLECTION, "u1", json!({"name": "alice"}));
        let connector = connector_with(store.clone()).await;

        let connection = connector.connect("r1", "u1").await.unwrap();

        assert!(!connection.edge_id.is_empty());
        assert_eq!(connection.user_id, "Users/u1");
        let edges = store.edges.lock().unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from, "Users/u1");
        assert_eq!(edges[0].to, "Rooms/r1");
    }

    #[tokio::test]
    async fn missing_room_reports_room_and_leaves_no_edge() {
        let store = Arc::new(FakeGraphStore::new());
        store.seed_vertex(USERS_COLLECTION, "u1", json!({"name": "alice"}));
        let connector = connector_with(store.clone()).await;

        let err = connector.connect("nope", "u1").await.unwrap_err();

        assert!(matches!(
            err,
            AtriumError::NotFound {
                subject: Subject::Room,
                ..
            }
        ));
        assert_eq!(store.edge_count(), 0);
    }

    #[tokio::test]
    async fn missing_user_reports_user_and_leaves_no_edge() {
        let store = Arc::new(FakeGraphStore::new());
        store.seed_vertex(ROOMS_COLLECTION, "r1", json!({"name": "Party"}));
        let connector = connector_with(store.clone()).await;

        let err = connector.connect("r1", "nope").await.unwrap_err();

        assert!(matches!(
            err,
            AtriumError::NotFound {
                subject: Subject::User,
                ..
            }
        ));
        assert_eq!(store.edge_count(), 0);
    }

    #[tokio::test]
    async fn both_endpoints_missing_reports_the_room() {
        let store = Arc::new(FakeGraphStore::new());
        let connector = connector_with(store.clone()).await;

        let err = connector.connect("nope", "also-nope").await.unwrap_err();

        assert!(matches!(
            err,
            AtriumError::NotFound {
                subject: Subject::Room,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn repeated_connects_insert_additional_edges() {
        let store = Arc::new(FakeGraphStore::new());
        store.seed_vertex(ROOMS_COLLECTION, "r1", json!({"name": "Party"}));
        store.seed_vertex(USERS_COLLECTION, "u1", json!({"name": "alice"}));
        let connector = connector_with(store.clone()).await;

        connector.connect("r1", "u1").await.unwrap();
        connector.connect("r1", "u1").await.unwrap();

        assert_eq!(store.edge_count(), 2);
    }

    #[tokio::test]
    async fn empty_identifiers_are_rejected_before_any_lookup() {
        let store = Arc::new(FakeGraphStore::new());
        let connector = connector_with(store.clone()).await;

        let err = connector.connect("", "u1").await.unwrap_err();
        assert!(matches!(err, AtriumError::Validation { .. }));

        let err = connector.connect("r1", "").await.unwrap_err();
        assert!(matches!(err, AtriumError::Validation { .. }));
    }

    #[tokio::test]
    async fn insert_failure_surfaces_as_store_fault() {
        let store = Arc::new(FakeGraphStore::new());
        store.seed_vertex(ROOMS_COLLECTION, "r1", json!({"name": "Party"}));
        store.seed_vertex(USERS_COLLECTION, "u1", json!({"name": "alice"}));
        let connector = connector_with(store.clone()).await;
        store.fail_edge_insert.store(true, Ordering::SeqCst);

        let err = connector.connect("r1", "u1").await.unwrap_err();

        assert!(matches!(err, AtriumError::GraphStore { .. }));
        assert_eq!(store.edge_count(), 0);
    }
}

//! Factory for selecting the room store backend.

use std::sync::Arc;

use atrium_core::config::RoomBackend;
use atrium_core::traits::{GraphStore, RoomStore};

/// Factory for creating the configured room store backend.
pub struct RoomStoreFactory;

impl RoomStoreFactory {
    /// Select the backend named by the deployment configuration. Both store
    /// handles exist at startup either way; users always live in Postgres.
    #[cfg(all(feature = "postgres", feature = "document"))]
    pub fn create(
        backend: RoomBackend,
        pool: sqlx::PgPool,
        graph_store: Arc<dyn GraphStore>,
    ) -> Arc<dyn RoomStore> {
        match backend {
            RoomBackend::Relational => Arc::new(crate::postgres::PgRoomStore::new(pool)),
            RoomBackend::Document => Arc::new(crate::document::DocumentRoomStore::new(graph_store)),
        }
    }
}

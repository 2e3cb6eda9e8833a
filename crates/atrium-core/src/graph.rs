//! Graph schema management.
//!
//! Lookup-or-create for the named relationship graph: an existing graph is
//! fetched and returned unchanged; an absent one is created with a single
//! edge definition running from the users collection into the target
//! collections. Schema creation runs once at startup by a single process;
//! concurrent creators racing on the same name are not handled.

use tracing::{debug, info};

use crate::error::{AtriumError, AtriumResult};
use crate::traits::{EdgeDefinition, GraphStore, NamedGraph};

/// Vertex collection holding user documents.
pub const USERS_COLLECTION: &str = "Users";
/// Vertex collection holding room documents.
pub const ROOMS_COLLECTION: &str = "Rooms";
/// Edge collection connecting users to rooms.
pub const EDGE_COLLECTION: &str = "Connection";

/// Ensure a graph named `name` exists, creating it when absent.
///
/// Safe to call repeatedly: a second call with the same arguments returns
/// the existing graph and performs no further creation. A fetch failure
/// after a positive existence check surfaces as a graph store fault; a
/// failed creation surfaces as a schema creation fault. Neither is retried.
pub async fn ensure_graph(
    store: &dyn GraphStore,
    name: &str,
    source: &str,
    targets: &[&str],
) -> AtriumResult<NamedGraph> {
    if name.is_empty() {
        return Err(AtriumError::validation("graph name must not be empty"));
    }

    if store.graph_exists(name).await? {
        debug!(graph = name, "graph exists already");
        return store.graph(name).await;
    }

    let edge_definition = EdgeDefinition {
        collection: EDGE_COLLECTION.to_string(),
        from: vec![source.to_string()],
        to: targets
            .iter()
            .map(|collection| collection.to_string())
            .collect(),
    };

    let graph = store
        .create_graph(name, edge_definition)
        .await
        .map_err(|err| {
            AtriumError::schema_creation(format!("failed to create graph '{name}'"), err)
        })?;
    info!(graph = name, "created graph");
    Ok(graph)
}

/// Ensure the default relationship graph: edges from `Users` into `Rooms`.
pub async fn ensure_default_graph(store: &dyn GraphStore, name: &str) -> AtriumResult<NamedGraph> {
    ensure_graph(store, name, USERS_COLLECTION, &[ROOMS_COLLECTION]).await
}

//! atrium-core - Core library for atrium.
//!
//! This crate provides the error taxonomy, domain types, store traits,
//! configuration, and the two relationship operations shared by the backend
//! and server crates: lookup-or-create management of the relationship graph
//! schema, and connecting a user to a room by inserting a directed edge.
//!
//! # Example
//!
//! ```ignore
//! use atrium_core::{ensure_default_graph, RoomConnector};
//!
//! let graph = ensure_default_graph(store.as_ref(), "atrium").await?;
//! let connector = RoomConnector::new(store, graph);
//! let connection = connector.connect("42", "7").await?;
//! ```

pub mod config;
pub mod connect;
pub mod deadline;
pub mod error;
pub mod graph;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{
    AppConfig, EnvProfile, PostgresConfig, RoomBackend, DEFAULT_GRAPH_NAME, DEFAULT_REQUEST_BUDGET,
};
pub use connect::RoomConnector;
pub use deadline::with_deadline;
pub use error::{AtriumError, AtriumResult, ErrorCode, Subject};
pub use graph::{
    ensure_default_graph, ensure_graph, EDGE_COLLECTION, ROOMS_COLLECTION, USERS_COLLECTION,
};
pub use traits::{
    EdgeDefinition, GraphStore, GraphStoreConfig, GraphStoreProvider, NamedGraph, RoomStore,
};
pub use types::{Connection, DocumentMeta, EdgeDocument, NewRoom, Room, RoomPatch, User};

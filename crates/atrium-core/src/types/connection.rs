//! Edge and document identity types.

use serde::{Deserialize, Serialize};

/// Identity assigned by the graph store to a persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Fully qualified identity, `{collection}/{key}`.
    #[serde(rename = "_id")]
    pub id: String,
    /// Key within the collection.
    #[serde(rename = "_key")]
    pub key: String,
    /// Store revision token.
    #[serde(rename = "_rev")]
    pub rev: String,
}

/// A directed edge document. Edges run from a user vertex to a room vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDocument {
    #[serde(rename = "_from")]
    pub from: String,
    #[serde(rename = "_to")]
    pub to: String,
}

/// Result of connecting a user to a room: the new edge's identity paired
/// with the identity of the user it resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub edge_id: String,
    pub user_id: String,
}

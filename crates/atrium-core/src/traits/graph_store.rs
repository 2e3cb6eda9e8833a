//! Graph store trait and related types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AtriumResult;
use crate::types::{DocumentMeta, EdgeDocument};

/// Schema rule stating which vertex collections an edge collection may
/// connect, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    /// Edge collection name.
    pub collection: String,
    /// Collections edges may start from.
    pub from: Vec<String>,
    /// Collections edges may point to.
    pub to: Vec<String>,
}

/// Handle to a named graph, as returned by the schema manager. Exposes the
/// edge collection the relationship connector inserts into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedGraph {
    name: String,
    edge_definition: EdgeDefinition,
}

impl NamedGraph {
    pub fn new(name: impl Into<String>, edge_definition: EdgeDefinition) -> Self {
        Self {
            name: name.into(),
            edge_definition,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the graph's edge collection.
    pub fn edge_collection(&self) -> &str {
        &self.edge_definition.collection
    }

    pub fn edge_definition(&self) -> &EdgeDefinition {
        &self.edge_definition
    }
}

/// Core GraphStore trait - all graph store backends implement this.
///
/// Vertex reads/updates return `None` for a missing document rather than an
/// error; callers decide whether a miss is a fault.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Check whether a graph with the given name exists.
    async fn graph_exists(&self, name: &str) -> AtriumResult<bool>;

    /// Fetch an existing graph by name.
    async fn graph(&self, name: &str) -> AtriumResult<NamedGraph>;

    /// Create a graph with the given edge definition. The store creates any
    /// missing vertex and edge collections named by the definition.
    async fn create_graph(
        &self,
        name: &str,
        edge_definition: EdgeDefinition,
    ) -> AtriumResult<NamedGraph>;

    /// Insert a vertex document, returning its assigned identity.
    async fn insert_vertex(&self, collection: &str, document: Value) -> AtriumResult<DocumentMeta>;

    /// Read a vertex by key.
    async fn read_vertex(
        &self,
        collection: &str,
        key: &str,
    ) -> AtriumResult<Option<(DocumentMeta, Value)>>;

    /// Partially update a vertex. Fields absent from the patch are left
    /// untouched, never zeroed.
    async fn update_vertex(
        &self,
        collection: &str,
        key: &str,
        patch: Value,
    ) -> AtriumResult<Option<DocumentMeta>>;

    /// Remove a vertex. Returns `false` when the vertex did not exist.
    async fn remove_vertex(&self, collection: &str, key: &str) -> AtriumResult<bool>;

    /// Insert a directed edge document into an edge collection.
    async fn insert_edge(&self, collection: &str, edge: &EdgeDocument)
        -> AtriumResult<DocumentMeta>;

    /// Number of documents currently in a collection.
    async fn document_count(&self, collection: &str) -> AtriumResult<u64>;
}

/// Graph store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStoreConfig {
    /// Provider type.
    pub provider: GraphStoreProvider,
    /// Connection URL.
    pub url: String,
    /// Username for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Database name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl Default for GraphStoreConfig {
    fn default() -> Self {
        Self {
            provider: GraphStoreProvider::ArangoDb,
            url: "http://localhost:8529".to_string(),
            username: None,
            password: None,
            database: None,
        }
    }
}

/// Graph store provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GraphStoreProvider {
    #[default]
    ArangoDb,
    Memory,
}

//! In-process graph store implementation.
//!
//! Backs tests and single-node development runs with the same document API
//! as the networked backends. Collections are created by `create_graph`;
//! inserting into an unknown collection creates it lazily. Keys are assigned
//! from a process-local counter.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use atrium_core::error::{AtriumError, AtriumResult};
use atrium_core::traits::{EdgeDefinition, GraphStore, NamedGraph};
use atrium_core::types::{DocumentMeta, EdgeDocument};

/// In-memory graph store implementation.
#[derive(Default)]
pub struct MemoryGraphStore {
    graphs: Arc<RwLock<HashMap<String, NamedGraph>>>,
    collections: Arc<RwLock<HashMap<String, BTreeMap<String, Value>>>>,
    next_key: AtomicU64,
    latency: Option<Duration>,
}

impl MemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject artificial latency ahead of every store call. Used to exercise
    /// deadline handling.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Place a document under an explicit key, creating the collection when
    /// absent. Lets tests and demos seed vertices with known identifiers.
    pub async fn put_document(&self, collection: &str, key: &str, document: Value) -> DocumentMeta {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), document);
        Self::meta(collection, key)
    }

    async fn pause(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn assign_key(&self) -> String {
        (self.next_key.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }

    fn meta(collection: &str, key: &str) -> DocumentMeta {
        DocumentMeta {
            id: format!("{collection}/{key}"),
            key: key.to_string(),
            rev: "1".to_string(),
        }
    }
}

#[async_trait]
impl GraphStore for MemoryGraphStore {
    async fn graph_exists(&self, name: &str) -> AtriumResult<bool> {
        self.pause().await;
        Ok(self.graphs.read().await.contains_key(name))
    }

    async fn graph(&self, name: &str) -> AtriumResult<NamedGraph> {
        self.pause().await;
        self.graphs
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| AtriumError::graph_not_found(name))
    }

    async fn create_graph(
        &self,
        name: &str,
        edge_definition: EdgeDefinition,
    ) -> AtriumResult<NamedGraph> {
        self.pause().await;
        let mut graphs = self.graphs.write().await;
        if graphs.contains_key(name) {
            return Err(AtriumError::graph_store(format!(
                "graph '{name}' already exists"
            )));
        }

        // The graph's collections come into existence with it.
        let mut collections = self.collections.write().await;
        for collection in edge_definition
            .from
            .iter()
            .chain(edge_definition.to.iter())
            .chain(std::iter::once(&edge_definition.collection))
        {
            collections.entry(collection.clone()).or_default();
        }

        let graph = NamedGraph::new(name, edge_definition);
        graphs.insert(name.to_string(), graph.clone());
        Ok(graph)
    }

    async fn insert_vertex(&self, collection: &str, document: Value) -> AtriumResult<DocumentMeta> {
        self.pause().await;
        let key = self.assign_key();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.clone(), document);
        Ok(Self::meta(collection, &key))
    }

    async fn read_vertex(
        &self,
        collection: &str,
        key: &str,
    ) -> AtriumResult<Option<(DocumentMeta, Value)>> {
        self.pause().await;
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|documents| documents.get(key))
            .map(|document| (Self::meta(collection, key), document.clone())))
    }

    async fn update_vertex(
        &self,
        collection: &str,
        key: &str,
        patch: Value,
    ) -> AtriumResult<Option<DocumentMeta>> {
        self.pause().await;
        let mut collections = self.collections.write().await;
        let Some(document) = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(key))
        else {
            return Ok(None);
        };
        if let (Some(target), Some(fields)) = (document.as_object_mut(), patch.as_object()) {
            for (field, value) in fields {
                target.insert(field.clone(), value.clone());
            }
        }
        Ok(Some(Self::meta(collection, key)))
    }

    async fn remove_vertex(&self, collection: &str, key: &str) -> AtriumResult<bool> {
        self.pause().await;
        Ok(self
            .collections
            .write()
            .await
            .get_mut(collection)
            .and_then(|documents| documents.remove(key))
            .is_some())
    }

    async fn insert_edge(
        &self,
        collection: &str,
        edge: &EdgeDocument,
    ) -> AtriumResult<DocumentMeta> {
        self.pause().await;
        let key = self.assign_key();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.clone(), serde_json::to_value(edge)?);
        Ok(Self::meta(collection, &key))
    }

    async fn document_count(&self, collection: &str) -> AtriumResult<u64> {
        self.pause().await;
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map(|documents| documents.len() as u64)
            .unwrap_or(0))
    }
}

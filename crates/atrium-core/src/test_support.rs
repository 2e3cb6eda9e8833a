//! Scriptable graph store double shared by the core unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AtriumError, AtriumResult};
use crate::traits::{EdgeDefinition, GraphStore, NamedGraph};
use crate::types::{DocumentMeta, EdgeDocument};

/// In-memory graph store that records call counts and can be scripted to
/// fail individual operations.
#[derive(Default)]
pub struct FakeGraphStore {
    pub graphs: Mutex<HashMap<String, NamedGraph>>,
    pub vertices: Mutex<HashMap<String, HashMap<String, Value>>>,
    pub edges: Mutex<Vec<EdgeDocument>>,
    pub create_graph_calls: AtomicUsize,
    pub fail_graph_fetch: AtomicBool,
    pub fail_create_graph: AtomicBool,
    pub fail_edge_insert: AtomicBool,
}

impl FakeGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_vertex(&self, collection: &str, key: &str, document: Value) {
        self.vertices
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), document);
    }

    pub fn edge_count(&self) -> usize {
        self.edges.lock().unwrap().len()
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
impl GraphStore for FakeGraphStore {
    async fn graph_exists(&self, name: &str) -> AtriumResult<bool> {
        Ok(self.graphs.lock().unwrap().contains_key(name))
    }

    async fn graph(&self, name: &str) -> AtriumResult<NamedGraph> {
        if self.fail_graph_fetch.load(Ordering::SeqCst) {
            return Err(AtriumError::graph_store("connection lost"));
        }
        self.graphs
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| AtriumError::graph_not_found(name))
    }

    async fn create_graph(
        &self,
        name: &str,
        edge_definition: EdgeDefinition,
    ) -> AtriumResult<NamedGraph> {
        self.create_graph_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create_graph.load(Ordering::SeqCst) {
            return Err(AtriumError::graph_store("creation rejected"));
        }
        let graph = NamedGraph::new(name, edge_definition);
        self.graphs
            .lock()
            .unwrap()
            .insert(name.to_string(), graph.clone());
        Ok(graph)
    }

    async fn insert_vertex(&self, collection: &str, document: Value) -> AtriumResult<DocumentMeta> {
        let mut vertices = self.vertices.lock().unwrap();
        let entry = vertices.entry(collection.to_string()).or_default();
        let key = (entry.len() + 1).to_string();
        entry.insert(key.clone(), document);
        Ok(Self::meta(collection, &key))
    }

    async fn read_vertex(
        &self,
        collection: &str,
        key: &str,
    ) -> AtriumResult<Option<(DocumentMeta, Value)>> {
        Ok(self
            .vertices
            .lock()
            .unwrap()
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
        let mut vertices = self.vertices.lock().unwrap();
        let Some(document) = vertices
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
        Ok(self
            .vertices
            .lock()
            .unwrap()
            .get_mut(collection)
            .and_then(|documents| documents.remove(key))
            .is_some())
    }

    async fn insert_edge(
        &self,
        collection: &str,
        edge: &EdgeDocument,
    ) -> AtriumResult<DocumentMeta> {
        if self.fail_edge_insert.load(Ordering::SeqCst) {
            return Err(AtriumError::graph_store("edge insert rejected"));
        }
        let mut edges = self.edges.lock().unwrap();
        edges.push(edge.clone());
        Ok(Self::meta(collection, &format!("e{}", edges.len())))
    }

    async fn document_count(&self, collection: &str) -> AtriumResult<u64> {
        if let Some(documents) = self.vertices.lock().unwrap().get(collection) {
            return Ok(documents.len() as u64);
        }
        Ok(self.edges.lock().unwrap().len() as u64)
    }
}

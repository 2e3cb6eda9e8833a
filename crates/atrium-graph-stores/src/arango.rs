//! ArangoDB graph store implementation.
//!
//! Talks to the ArangoDB HTTP API: graphs are managed through the gharial
//! endpoints, vertices and edges through the document API. Store-side error
//! bodies are logged, never returned to callers.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use atrium_core::error::{AtriumError, AtriumResult};
use atrium_core::traits::{EdgeDefinition, GraphStore, GraphStoreConfig, NamedGraph};
use atrium_core::types::{DocumentMeta, EdgeDocument};

/// ArangoDB graph store implementation.
pub struct ArangoGraphStore {
    client: Client,
    base: String,
    config: GraphStoreConfig,
}

#[derive(Debug, Deserialize)]
struct GraphEnvelope {
    graph: GraphBody,
}

#[derive(Debug, Deserialize)]
struct GraphBody {
    name: String,
    #[serde(rename = "edgeDefinitions")]
    edge_definitions: Vec<EdgeDefinition>,
}

#[derive(Debug, Deserialize)]
struct CountBody {
    count: u64,
}

impl ArangoGraphStore {
    /// Create a new ArangoDB store. The connection is established lazily on
    /// first request.
    pub fn new(config: GraphStoreConfig) -> AtriumResult<Self> {
        let client = Client::builder().build().map_err(|err| {
            AtriumError::graph_store_with_source("failed to build HTTP client", err)
        })?;
        let database = config
            .database
            .clone()
            .unwrap_or_else(|| "_system".to_string());
        let base = format!("{}/_db/{}", config.url.trim_end_matches('/'), database);
        Ok(Self {
            client,
            base,
            config,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.client.request(method, format!("{}{}", self.base, path));
        if let Some(username) = &self.config.username {
            request = request.basic_auth(username, self.config.password.as_deref());
        }
        request
    }

    async fn send(&self, request: RequestBuilder) -> AtriumResult<Response> {
        request.send().await.map_err(|err| {
            AtriumError::graph_store_with_source("graph store request failed", err)
        })
    }

    /// Turn a non-success response into a classified fault. The store's own
    /// message goes to the log; callers only see the operation and status.
    async fn reject<T>(operation: &'static str, response: Response) -> AtriumResult<T> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        debug!(%status, body = %body, operation, "graph store rejected request");
        Err(AtriumError::graph_store(format!(
            "{operation} failed with status {status}"
        )))
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> AtriumResult<T> {
        response.json().await.map_err(|err| {
            AtriumError::graph_store_with_source("malformed graph store response", err)
        })
    }

    fn graph_from(body: GraphBody) -> AtriumResult<NamedGraph> {
        let edge_definition = body
            .edge_definitions
            .into_iter()
            .next()
            .ok_or_else(|| AtriumError::graph_store("graph has no edge definitions"))?;
        Ok(NamedGraph::new(body.name, edge_definition))
    }
}

#[async_trait]
impl GraphStore for ArangoGraphStore {
    async fn graph_exists(&self, name: &str) -> AtriumResult<bool> {
        let response = self
            .send(self.request(Method::GET, &format!("/_api/gharial/{name}")))
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            _ => Self::reject("graph existence check", response).await,
        }
    }

    async fn graph(&self, name: &str) -> AtriumResult<NamedGraph> {
        let response = self
            .send(self.request(Method::GET, &format!("/_api/gharial/{name}")))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AtriumError::graph_not_found(name));
        }
        if !response.status().is_success() {
            return Self::reject("graph fetch", response).await;
        }
        let envelope: GraphEnvelope = Self::parse(response).await?;
        Self::graph_from(envelope.graph)
    }

    async fn create_graph(
        &self,
        name: &str,
        edge_definition: EdgeDefinition,
    ) -> AtriumResult<NamedGraph> {
        let body = serde_json::json!({
            "name": name,
            "edgeDefinitions": [edge_definition],
        });
        let response = self
            .send(self.request(Method::POST, "/_api/gharial").json(&body))
            .await?;
        if !response.status().is_success() {
            return Self::reject("graph creation", response).await;
        }
        let envelope: GraphEnvelope = Self::parse(response).await?;
        Self::graph_from(envelope.graph)
    }

    async fn insert_vertex(&self, collection: &str, document: Value) -> AtriumResult<DocumentMeta> {
        let response = self
            .send(
                self.request(Method::POST, &format!("/_api/document/{collection}"))
                    .json(&document),
            )
            .await?;
        if !response.status().is_success() {
            return Self::reject("vertex insert", response).await;
        }
        Self::parse(response).await
    }

    async fn read_vertex(
        &self,
        collection: &str,
        key: &str,
    ) -> AtriumResult<Option<(DocumentMeta, Value)>> {
        let response = self
            .send(self.request(Method::GET, &format!("/_api/document/{collection}/{key}")))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Self::reject("vertex read", response).await;
        }
        let document: Value = Self::parse(response).await?;
        let meta: DocumentMeta = serde_json::from_value(document.clone()).map_err(|err| {
            AtriumError::graph_store_with_source("document is missing identity fields", err)
        })?;
        Ok(Some((meta, document)))
    }

    async fn update_vertex(
        &self,
        collection: &str,
        key: &str,
        patch: Value,
    ) -> AtriumResult<Option<DocumentMeta>> {
        let response = self
            .send(
                self.request(Method::PATCH, &format!("/_api/document/{collection}/{key}"))
                    .json(&patch),
            )
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Self::reject("vertex update", response).await;
        }
        let meta: DocumentMeta = Self::parse(response).await?;
        Ok(Some(meta))
    }

    async fn remove_vertex(&self, collection: &str, key: &str) -> AtriumResult<bool> {
        let response = self
            .send(self.request(Method::DELETE, &format!("/_api/document/{collection}/{key}")))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Self::reject("vertex delete", response).await;
        }
        Ok(true)
    }

    async fn insert_edge(
        &self,
        collection: &str,
        edge: &EdgeDocument,
    ) -> AtriumResult<DocumentMeta> {
        let response = self
            .send(
                self.request(Method::POST, &format!("/_api/document/{collection}"))
                    .json(edge),
            )
            .await?;
        if !response.status().is_success() {
            return Self::reject("edge insert", response).await;
        }
        Self::parse(response).await
    }

    async fn document_count(&self, collection: &str) -> AtriumResult<u64> {
        let response = self
            .send(self.request(
                Method::GET,
                &format!("/_api/collection/{collection}/count"),
            ))
            .await?;
        if !response.status().is_success() {
            return Self::reject("collection count", response).await;
        }
        let body: CountBody = Self::parse(response).await?;
        Ok(body.count)
    }
}

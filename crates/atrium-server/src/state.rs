//! Server state management.

use std::sync::Arc;
use std::time::Duration;

use atrium_core::connect::RoomConnector;
use atrium_core::traits::{GraphStore, NamedGraph, RoomStore};

/// Shared application state.
///
/// Store handles are opened once at startup and constructor-injected;
/// handlers only ever see trait objects, so tests can substitute in-memory
/// backends.
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<dyn RoomStore>,
    pub connector: Arc<RoomConnector>,
    /// Per-request deadline for store interactions.
    pub request_budget: Duration,
}

impl AppState {
    pub fn new(
        rooms: Arc<dyn RoomStore>,
        graph_store: Arc<dyn GraphStore>,
        graph: NamedGraph,
        request_budget: Duration,
    ) -> Self {
        Self {
            rooms,
            connector: Arc::new(RoomConnector::new(graph_store, graph)),
            request_budget,
        }
    }
}

//! Wires configuration into live store handles and application state.

use tracing::info;

use atrium_core::config::AppConfig;
use atrium_core::error::AtriumResult;
use atrium_core::graph::ensure_default_graph;
use atrium_graph_stores::GraphStoreFactory;
use atrium_room_stores::{connect_pool, PgRoomStore, RoomStoreFactory};

use crate::state::AppState;

/// Build the application state: connect both stores, migrate the relational
/// schema, and ensure the relationship graph exists. A schema creation
/// failure here is fatal to startup - the caller must not serve traffic
/// without the graph.
pub async fn build_state(config: &AppConfig) -> AtriumResult<AppState> {
    let pool = connect_pool(&config.postgres).await?;
    PgRoomStore::new(pool.clone()).migrate().await?;
    info!("connected to Postgres");

    let graph_store = GraphStoreFactory::create(config.graph_store.clone())?;
    let graph = ensure_default_graph(graph_store.as_ref(), &config.graph_name).await?;
    info!(graph = %config.graph_name, "graph schema ready");

    let rooms = RoomStoreFactory::create(config.room_backend, pool, graph_store.clone());
    Ok(AppState::new(
        rooms,
        graph_store,
        graph,
        config.request_budget,
    ))
}

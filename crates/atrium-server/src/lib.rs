//! atrium-server - REST API server for atrium.
//!
//! This crate provides the HTTP surface over the room stores and the
//! relationship connector.
//!
//! # Example
//!
//! ```ignore
//! use atrium_server::{create_server, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = AppState::new(rooms, graph_store, graph, budget);
//!     let app = create_server(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod extractors;
pub mod factory;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use factory::build_state;
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}

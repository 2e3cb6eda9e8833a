//! Route definitions for the REST API.

mod connect;
mod health;
mod rooms;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Room operations
        .route("/rooms", post(rooms::create_room))
        .route("/rooms/:id", get(rooms::get_room))
        .route("/rooms/:id", put(rooms::update_room))
        .route("/rooms/:id", patch(rooms::update_room))
        .route("/rooms/:id", delete(rooms::delete_room))
        // Relationship operations
        .route("/rooms/:id/connect", post(connect::connect_user))
        // Attach state
        .with_state(state)
}

pub use connect::*;
pub use health::*;
pub use rooms::*;

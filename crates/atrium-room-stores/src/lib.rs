//! atrium-room-stores - Room store implementations for atrium.
//!
//! Two interchangeable backends implement the `RoomStore` contract:
//!
//! - **Postgres** (feature: `postgres`) - rooms and users as relational
//!   tables via sqlx, auto-migrated at startup
//! - **Document** (feature: `document`) - rooms as vertices in the graph
//!   store's `Rooms` collection
//!
//! The deployment configuration selects one of them through
//! `RoomStoreFactory`; handler logic is written once against the trait.

mod factory;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "document")]
mod document;

pub use factory::RoomStoreFactory;

#[cfg(feature = "postgres")]
pub use postgres::{connect_pool, PgRoomStore};

#[cfg(feature = "document")]
pub use document::DocumentRoomStore;

// Re-export core types
pub use atrium_core::traits::RoomStore;

//! atrium-graph-stores - Graph store implementations for atrium.
//!
//! This crate provides graph database backends for storing room/user
//! relationship edges and the schema that frames them.
//!
//! # Supported Backends
//!
//! - **ArangoDB** (feature: `arangodb`) - ArangoDB over its HTTP API
//! - **Memory** (feature: `memory`) - In-process store for tests and
//!   single-node development

mod factory;

#[cfg(feature = "arangodb")]
mod arango;

#[cfg(feature = "memory")]
mod memory;

pub use factory::GraphStoreFactory;

#[cfg(feature = "arangodb")]
pub use arango::ArangoGraphStore;

#[cfg(feature = "memory")]
pub use memory::MemoryGraphStore;

// Re-export core types
pub use atrium_core::traits::{GraphStore, GraphStoreConfig, GraphStoreProvider};

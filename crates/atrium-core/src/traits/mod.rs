//! Store traits implemented by the backend crates.

mod graph_store;
mod room_store;

pub use graph_store::{
    EdgeDefinition, GraphStore, GraphStoreConfig, GraphStoreProvider, NamedGraph,
};
pub use room_store::RoomStore;

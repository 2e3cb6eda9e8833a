//! Factory for creating graph store providers.

use std::sync::Arc;

use atrium_core::error::{AtriumError, AtriumResult};
use atrium_core::traits::{GraphStore, GraphStoreConfig, GraphStoreProvider};

/// Factory for creating graph store providers.
pub struct GraphStoreFactory;

impl GraphStoreFactory {
    /// Create a graph store from the given configuration.
    pub fn create(config: GraphStoreConfig) -> AtriumResult<Arc<dyn GraphStore>> {
        match config.provider {
            #[cfg(feature = "arangodb")]
            GraphStoreProvider::ArangoDb => {
                let store = crate::arango::ArangoGraphStore::new(config)?;
                Ok(Arc::new(store))
            }

            #[cfg(feature = "memory")]
            GraphStoreProvider::Memory => Ok(Arc::new(crate::memory::MemoryGraphStore::new())),

            #[allow(unreachable_patterns)]
            other => Err(AtriumError::Configuration(format!(
                "unsupported graph store provider: {other:?}"
            ))),
        }
    }
}

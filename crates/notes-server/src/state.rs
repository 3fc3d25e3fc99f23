//! Application state shared across the dispatcher and handlers.

use std::sync::Arc;

use notes_core::ContractTable;
use notes_store::Store;

use crate::config::ServerConfig;

/// Application state shared across all requests.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// The contract table is built once here and read-only thereafter.
#[derive(Clone)]
pub struct AppState {
    /// Database store.
    store: Arc<Store>,
    /// Registered endpoint contracts.
    contracts: Arc<ContractTable>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Store, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            contracts: Arc::new(ContractTable::notes_api()),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the database store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get a reference to the contract table.
    pub fn contracts(&self) -> &ContractTable {
        &self.contracts
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

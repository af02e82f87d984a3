//! Session context and provider capabilities.
//!
//! The session layer hands each request a context carrying the provider
//! capabilities registered for it. Gridlink cares about one capability: the
//! connection provider, which owns the link to the cache grid and answers
//! topology and named-cache lookups.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::{GridError, GridResult};
use crate::grid::CacheHandle;
use crate::topology::TopologyInfo;

/// Capability owning the link to the cache grid.
///
/// Implementations are registered on the session context at request setup;
/// lookups fail when no provider was registered.
pub trait ConnectionProvider: Send + Sync {
    /// Topology of the grid this provider is connected to.
    fn topology_info(&self) -> TopologyInfo;

    /// Look up a named cache.
    fn cache(&self, name: &str) -> GridResult<Arc<CacheHandle>>;
}

/// Per-request session context carrying registered provider capabilities.
#[derive(Default)]
pub struct SessionContext {
    connection_provider: RwLock<Option<Arc<dyn ConnectionProvider>>>,
}

impl SessionContext {
    /// Create a context with no registered providers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the connection provider capability.
    ///
    /// Replaces any previously registered provider.
    pub fn register_connection_provider(&self, provider: Arc<dyn ConnectionProvider>) {
        tracing::debug!("connection provider registered");
        *self.connection_provider.write() = Some(provider);
    }

    /// The registered connection provider.
    ///
    /// Fails with [`GridError::ProviderMissing`] when none was registered.
    pub fn connection_provider(&self) -> GridResult<Arc<dyn ConnectionProvider>> {
        self.connection_provider
            .read()
            .clone()
            .ok_or_else(|| GridError::provider_missing("connection"))
    }
}

/// Connection provider over a fixed topology and a named-cache registry.
///
/// The grid hands out richer providers in production; this one covers
/// embedded deployments and tests.
pub struct GridConnectionProvider {
    topology: TopologyInfo,
    caches: RwLock<HashMap<String, Arc<CacheHandle>>>,
}

impl GridConnectionProvider {
    /// Create a provider for the given topology.
    pub fn new(topology: TopologyInfo) -> Self {
        Self {
            topology,
            caches: RwLock::new(HashMap::new()),
        }
    }

    /// Register a named cache with this provider.
    pub fn register_cache(&self, cache: Arc<CacheHandle>) {
        let name = cache.name().to_string();
        tracing::debug!(cache = %name, "cache registered with connection provider");
        self.caches.write().insert(name, cache);
    }

    /// Number of registered caches.
    pub fn cache_count(&self) -> usize {
        self.caches.read().len()
    }
}

impl ConnectionProvider for GridConnectionProvider {
    fn topology_info(&self) -> TopologyInfo {
        self.topology.clone()
    }

    fn cache(&self, name: &str) -> GridResult<Arc<CacheHandle>> {
        self.caches
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| GridError::cache_not_found(name))
    }
}

//! Cache grid surface model.
//!
//! Gridlink never owns a cache; it borrows handles to caches owned by the
//! external grid. A handle is tagged [`Embedded`](CacheHandle::Embedded) or
//! [`Remote`](CacheHandle::Remote) where it is constructed, so no call site
//! has to re-derive what kind of cache it is holding.

pub mod persistence;
pub mod remote;
pub mod transport;

pub use persistence::{PersistenceManager, Store};
pub use remote::{ProtocolVersion, RemoteCache, RemoteClientConfig, RemoteStore};
pub use transport::{ClusterView, Transport};

use std::sync::Arc;

/// Manager of embedded caches.
///
/// Owns the optional cluster transport. A manager without a transport is a
/// non-clustered (local-only) deployment.
pub struct CacheManager {
    transport: Option<Arc<dyn Transport>>,
}

impl CacheManager {
    /// Create a manager for a non-clustered deployment.
    pub fn local() -> Self {
        Self { transport: None }
    }

    /// Create a manager attached to a cluster transport.
    pub fn clustered(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// The cluster transport, if this deployment is clustered.
    pub fn transport(&self) -> Option<&dyn Transport> {
        self.transport.as_deref()
    }
}

/// An embedded cache: lives in-process, may be clustered, may persist to
/// local or remote stores.
pub struct EmbeddedCache {
    name: String,
    manager: Arc<CacheManager>,
    persistence: PersistenceManager,
}

impl EmbeddedCache {
    /// Create an embedded cache under the given manager.
    pub fn new(
        name: impl Into<String>,
        manager: Arc<CacheManager>,
        persistence: PersistenceManager,
    ) -> Self {
        Self {
            name: name.into(),
            manager,
            persistence,
        }
    }

    /// Cache name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The manager this cache belongs to.
    pub fn manager(&self) -> &CacheManager {
        &self.manager
    }

    /// The persistence component holding this cache's configured stores.
    pub fn persistence(&self) -> &PersistenceManager {
        &self.persistence
    }
}

/// A borrowed handle to a cache, tagged with where the cache lives.
pub enum CacheHandle {
    /// In-process cache backed by a cache manager and persistence stores.
    Embedded(EmbeddedCache),
    /// Client handle to a cache hosted on an external grid.
    Remote(Arc<RemoteCache>),
}

impl CacheHandle {
    /// Cache name.
    pub fn name(&self) -> &str {
        match self {
            Self::Embedded(cache) => cache.name(),
            Self::Remote(cache) => cache.name(),
        }
    }

    /// Whether this handle points at a remote cache.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl std::fmt::Debug for CacheHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded(cache) => write!(f, "CacheHandle::Embedded({})", cache.name()),
            Self::Remote(cache) => write!(f, "CacheHandle::Remote({})", cache.name()),
        }
    }
}

//! Persistence store descriptors.
//!
//! An embedded cache persists through zero or more configured stores. Stores
//! are tagged by kind; the session layer only ever asks for the remote ones
//! (cross-datacenter links), but the manager keeps every configured store so
//! the grid owns the full picture.

use std::path::PathBuf;
use std::sync::Arc;

use crate::grid::remote::RemoteStore;

/// A configured persistence backend for an embedded cache.
#[derive(Debug)]
pub enum Store {
    /// File-backed local store.
    File(FileStore),
    /// Cross-datacenter remote store.
    Remote(Arc<RemoteStore>),
}

/// File-backed local store descriptor.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory the store writes to.
    pub location: PathBuf,
}

impl FileStore {
    /// Create a file store descriptor for the given directory.
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// The persistence component of an embedded cache.
///
/// Stores are kept in configuration order; every accessor reports them in
/// that order.
#[derive(Debug, Default)]
pub struct PersistenceManager {
    stores: Vec<Store>,
}

impl PersistenceManager {
    /// Create a persistence manager with no configured stores.
    pub fn new() -> Self {
        Self { stores: Vec::new() }
    }

    /// Append a store in configuration order.
    pub fn add_store(&mut self, store: Store) {
        self.stores.push(store);
    }

    /// All configured stores.
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// The remote stores, in configuration order. Empty when no remote store
    /// is configured.
    pub fn remote_stores(&self) -> Vec<Arc<RemoteStore>> {
        self.stores
            .iter()
            .filter_map(|store| match store {
                Store::Remote(remote) => Some(Arc::clone(remote)),
                Store::File(_) => None,
            })
            .collect()
    }

    /// Whether any remote store is configured.
    pub fn has_remote_store(&self) -> bool {
        self.stores
            .iter()
            .any(|store| matches!(store, Store::Remote(_)))
    }
}

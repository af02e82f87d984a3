//! Grid surface model tests.

mod common;

use common::remote_store;
use gridlink::grid::persistence::{FileStore, PersistenceManager, Store};
use gridlink::grid::remote::{ProtocolVersion, RemoteStore};
use gridlink::grid::transport::{ClusterView, Transport};
use gridlink::grid::{CacheHandle, CacheManager, EmbeddedCache};
use std::sync::Arc;

// ============================================================================
// Persistence store filtering
// ============================================================================

#[test]
fn persistence_manager_starts_empty() {
    let persistence = PersistenceManager::new();
    assert!(persistence.stores().is_empty());
    assert!(persistence.remote_stores().is_empty());
    assert!(!persistence.has_remote_store());
}

#[test]
fn remote_store_filtering_skips_file_stores() {
    let mut persistence = PersistenceManager::new();
    persistence.add_store(Store::File(FileStore::new("/var/lib/grid/a")));
    let remote = remote_store("sessions", ProtocolVersion::V29);
    persistence.add_store(Store::Remote(remote.clone()));
    persistence.add_store(Store::File(FileStore::new("/var/lib/grid/b")));

    assert_eq!(persistence.stores().len(), 3);
    let remotes = persistence.remote_stores();
    assert_eq!(remotes.len(), 1);
    assert!(Arc::ptr_eq(&remotes[0], &remote));
    assert!(persistence.has_remote_store());
}

#[test]
fn remote_stores_keep_configuration_order() {
    let mut persistence = PersistenceManager::new();
    let first = remote_store("sessions", ProtocolVersion::V29);
    let second = remote_store("offline-sessions", ProtocolVersion::V30);
    persistence.add_store(Store::Remote(first.clone()));
    persistence.add_store(Store::Remote(second.clone()));

    let remotes = persistence.remote_stores();
    assert!(Arc::ptr_eq(&remotes[0], &first));
    assert!(Arc::ptr_eq(&remotes[1], &second));
}

// ============================================================================
// Cache handles and managers
// ============================================================================

#[test]
fn local_manager_has_no_transport() {
    let manager = CacheManager::local();
    assert!(manager.transport().is_none());
}

#[test]
fn clustered_manager_exposes_its_transport() {
    let view = Arc::new(ClusterView::new(
        "node-1",
        vec!["node-1".to_string(), "node-2".to_string()],
    ));
    let manager = CacheManager::clustered(view);

    let transport = manager.transport().expect("transport should be present");
    assert_eq!(transport.local_node(), "node-1");
    assert_eq!(transport.members().len(), 2);
}

#[test]
fn handle_names_follow_the_cache() {
    let embedded = CacheHandle::Embedded(EmbeddedCache::new(
        "sessions",
        Arc::new(CacheManager::local()),
        PersistenceManager::new(),
    ));
    assert_eq!(embedded.name(), "sessions");
    assert!(!embedded.is_remote());

    let store = remote_store("offline-sessions", ProtocolVersion::V31);
    let remote = CacheHandle::Remote(Arc::clone(store.remote_cache()));
    assert_eq!(remote.name(), "offline-sessions");
    assert!(remote.is_remote());
}

#[test]
fn remote_store_descriptor_links_cache_names() {
    let store: Arc<RemoteStore> = remote_store("sessions", ProtocolVersion::V29);
    assert_eq!(store.cache_name(), "sessions");
    assert_eq!(store.remote_cache().name(), "sessions");
    assert_eq!(
        store.remote_cache().protocol_version(),
        ProtocolVersion::V29
    );
}

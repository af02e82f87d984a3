//! Common test utilities.
//!
//! This module contains shared helpers for integration tests.
//! Import with `mod common;` in test files.

use gridlink::core::config::GridConfig;
use gridlink::grid::persistence::{FileStore, PersistenceManager, Store};
use gridlink::grid::remote::{ProtocolVersion, RemoteCache, RemoteClientConfig, RemoteStore};
use gridlink::grid::transport::ClusterView;
use gridlink::grid::{CacheHandle, CacheManager, EmbeddedCache};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Create a minimal valid configuration file.
pub fn create_minimal_config() -> NamedTempFile {
    let config_content = r#"
[cluster]
site = "dc-1"
node = "node-1"
"#;

    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(config_content.as_bytes())
        .expect("Failed to write config");
    file
}

/// Create a configuration with one remote store at the given protocol version.
pub fn create_config_with_remote_store(protocol_version: &str) -> NamedTempFile {
    let config_content = format!(
        r#"
[cluster]
site = "dc-1"
node = "node-1"
members = ["node-1", "node-2"]

[[remote_stores]]
cache_name = "sessions"
endpoints = ["jdg1.example.com:11222"]
protocol_version = "{}"
"#,
        protocol_version
    );

    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(config_content.as_bytes())
        .expect("Failed to write config");
    file
}

/// Load a config from a temp file.
pub fn load_config(file: &NamedTempFile) -> GridConfig {
    GridConfig::from_file(file.path()).expect("Failed to load config")
}

/// Create an embedded cache handle with no transport and no stores.
pub fn local_cache(name: &str) -> CacheHandle {
    CacheHandle::Embedded(EmbeddedCache::new(
        name,
        Arc::new(CacheManager::local()),
        PersistenceManager::new(),
    ))
}

/// Create an embedded cache handle under a clustered manager.
pub fn clustered_cache(name: &str, local_node: &str, members: &[&str]) -> CacheHandle {
    let view = ClusterView::new(
        local_node,
        members.iter().map(|m| (*m).to_string()).collect(),
    );
    CacheHandle::Embedded(EmbeddedCache::new(
        name,
        Arc::new(CacheManager::clustered(Arc::new(view))),
        PersistenceManager::new(),
    ))
}

/// Create a remote store descriptor for a cache at the given version.
pub fn remote_store(cache_name: &str, version: ProtocolVersion) -> Arc<RemoteStore> {
    let client = RemoteClientConfig {
        endpoints: vec![format!("{}.remote.example.com:11222", cache_name)],
        version,
    };
    let remote = Arc::new(RemoteCache::new(cache_name, client));
    Arc::new(RemoteStore::new(cache_name, remote))
}

/// Create an embedded cache handle backed by the given remote stores.
///
/// A local file store is configured first, so remote-store filtering is
/// exercised against a mixed store list.
pub fn cache_with_remote_stores(name: &str, stores: Vec<Arc<RemoteStore>>) -> CacheHandle {
    let mut persistence = PersistenceManager::new();
    persistence.add_store(Store::File(FileStore::new("/var/lib/grid/store")));
    for store in stores {
        persistence.add_store(Store::Remote(store));
    }
    CacheHandle::Embedded(EmbeddedCache::new(
        name,
        Arc::new(CacheManager::local()),
        persistence,
    ))
}

/// Create a remote cache handle at the given protocol version.
pub fn remote_handle(name: &str, version: ProtocolVersion) -> CacheHandle {
    let client = RemoteClientConfig {
        endpoints: vec!["jdg1.example.com:11222".to_string()],
        version,
    };
    CacheHandle::Remote(Arc::new(RemoteCache::new(name, client)))
}

/// Assert that a result is Err.
#[track_caller]
pub fn assert_err<T: std::fmt::Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
        Err(e) => e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_minimal_config() {
        let file = create_minimal_config();
        let config = load_config(&file);
        assert_eq!(config.cluster.site, "dc-1");
        assert!(config.remote_stores.is_empty());
    }

    #[test]
    fn test_create_config_with_remote_store() {
        let file = create_config_with_remote_store("2.9");
        let config = load_config(&file);
        assert_eq!(config.remote_stores.len(), 1);
        assert_eq!(config.remote_stores[0].cache_name, "sessions");
    }

    #[test]
    fn test_local_cache_is_not_remote() {
        assert!(!local_cache("sessions").is_remote());
        assert!(remote_handle("sessions", ProtocolVersion::V30).is_remote());
    }
}

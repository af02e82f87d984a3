//! Remote caches and cross-datacenter store links.
//!
//! An embedded cache can be backed by one or more remote stores, each linking
//! it to a cache hosted on an external grid in another datacenter. The remote
//! client negotiates a hotrod wire-protocol version per endpoint; expiration
//! semantics differ across versions (see
//! [`crate::topology::helper::to_hotrod_time_ms`]).

use std::str::FromStr;
use std::sync::Arc;

use crate::core::config::RemoteStoreConfig;
use crate::core::error::{GridError, GridResult};

/// Negotiated hotrod wire-protocol version.
///
/// Variants are declared in wire order, so the derived ordering matches the
/// protocol's own version comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProtocolVersion {
    /// Protocol 2.0
    V20,
    /// Protocol 2.1
    V21,
    /// Protocol 2.2
    V22,
    /// Protocol 2.3
    V23,
    /// Protocol 2.4
    V24,
    /// Protocol 2.5
    V25,
    /// Protocol 2.6
    V26,
    /// Protocol 2.7
    V27,
    /// Protocol 2.8
    V28,
    /// Protocol 2.9
    V29,
    /// Protocol 3.0
    V30,
    /// Protocol 3.1
    V31,
}

impl ProtocolVersion {
    /// Versions older than 3.0 use a lifespan as the normal expiration time
    /// when the value is 30 days or less, but treat bigger values as unix
    /// timestamps. From 3.0 on, large lifespans need no compensation.
    pub fn treats_large_lifespan_as_timestamp(self) -> bool {
        self < Self::V30
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::V31
    }
}

impl std::fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::V20 => "2.0",
            Self::V21 => "2.1",
            Self::V22 => "2.2",
            Self::V23 => "2.3",
            Self::V24 => "2.4",
            Self::V25 => "2.5",
            Self::V26 => "2.6",
            Self::V27 => "2.7",
            Self::V28 => "2.8",
            Self::V29 => "2.9",
            Self::V30 => "3.0",
            Self::V31 => "3.1",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ProtocolVersion {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        match s {
            "2.0" => Ok(Self::V20),
            "2.1" => Ok(Self::V21),
            "2.2" => Ok(Self::V22),
            "2.3" => Ok(Self::V23),
            "2.4" => Ok(Self::V24),
            "2.5" => Ok(Self::V25),
            "2.6" => Ok(Self::V26),
            "2.7" => Ok(Self::V27),
            "2.8" => Ok(Self::V28),
            "2.9" => Ok(Self::V29),
            "3.0" => Ok(Self::V30),
            "3.1" => Ok(Self::V31),
            _ => Err(GridError::unsupported_protocol_version(s)),
        }
    }
}

/// Client configuration negotiated with a remote endpoint.
#[derive(Debug, Clone)]
pub struct RemoteClientConfig {
    /// Remote endpoint addresses.
    pub endpoints: Vec<String>,

    /// Negotiated protocol version.
    pub version: ProtocolVersion,
}

impl Default for RemoteClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            version: ProtocolVersion::default(),
        }
    }
}

/// Client handle to a cache hosted on an external grid.
pub struct RemoteCache {
    name: String,
    config: RemoteClientConfig,
}

impl RemoteCache {
    /// Create a remote cache handle.
    pub fn new(name: impl Into<String>, config: RemoteClientConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    /// Cache name on the external grid.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The client configuration this handle was built with.
    pub fn config(&self) -> &RemoteClientConfig {
        &self.config
    }

    /// The negotiated protocol version.
    pub fn protocol_version(&self) -> ProtocolVersion {
        self.config.version
    }
}

impl std::fmt::Debug for RemoteCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RemoteCache({}, hotrod {})",
            self.name, self.config.version
        )
    }
}

/// A configured link from an embedded cache to an externally hosted cache,
/// used for cross-datacenter replication.
pub struct RemoteStore {
    cache_name: String,
    remote_cache: Arc<RemoteCache>,
}

impl RemoteStore {
    /// Create a remote store descriptor around an existing remote cache handle.
    pub fn new(cache_name: impl Into<String>, remote_cache: Arc<RemoteCache>) -> Self {
        Self {
            cache_name: cache_name.into(),
            remote_cache,
        }
    }

    /// Build a remote store (and its remote cache handle) from configuration.
    pub fn from_config(config: &RemoteStoreConfig) -> GridResult<Self> {
        let version = config.parsed_protocol_version()?;
        let client = RemoteClientConfig {
            endpoints: config.endpoints.clone(),
            version,
        };
        let remote_cache = Arc::new(RemoteCache::new(config.cache_name.clone(), client));
        Ok(Self::new(config.cache_name.clone(), remote_cache))
    }

    /// Name of the cache this store links to.
    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    /// The remote cache this store writes through to.
    pub fn remote_cache(&self) -> &Arc<RemoteCache> {
        &self.remote_cache
    }
}

impl std::fmt::Debug for RemoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RemoteStore({})", self.cache_name)
    }
}

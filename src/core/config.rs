//! Configuration parsing and validation.
//!
//! Gridlink configuration is loaded from TOML files. Sections mirror the
//! collaborators the crate bridges to: the local cluster identity and
//! membership, the remote-store links for cross-datacenter replication, and
//! the retry budget handed to callers performing optimistic replace loops.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::grid::remote::ProtocolVersion;
use crate::topology::helper::MAXIMUM_REPLACE_RETRIES;

/// Top-level gridlink configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Local cluster identity and membership.
    #[serde(default)]
    pub cluster: ClusterConfig,

    /// Remote store links for cross-datacenter replication.
    #[serde(default)]
    pub remote_stores: Vec<RemoteStoreConfig>,

    /// Retry budget for optimistic replace loops against the grid.
    #[serde(default = "default_replace_retry_budget")]
    pub replace_retry_budget: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cluster: ClusterConfig::default(),
            remote_stores: Vec::new(),
            replace_retry_budget: default_replace_retry_budget(),
        }
    }
}

/// Cluster identity and membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Site (datacenter) this node runs in.
    #[serde(default = "default_site")]
    pub site: String,

    /// This node's name.
    #[serde(default = "default_node")]
    pub node: String,

    /// Cluster members in view order. Empty means a non-clustered deployment.
    #[serde(default)]
    pub members: Vec<String>,

    /// Seed version for the key-ownership hash.
    #[serde(default)]
    pub hash_seed: u64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            site: default_site(),
            node: default_node(),
            members: Vec::new(),
            hash_seed: 0,
        }
    }
}

/// A configured remote store link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteStoreConfig {
    /// Name of the cache hosted on the external grid.
    pub cache_name: String,

    /// Remote endpoint addresses (e.g., "jdg1.example.com:11222").
    pub endpoints: Vec<String>,

    /// Negotiated hotrod protocol version (e.g., "2.9", "3.0").
    #[serde(default = "default_protocol_version")]
    pub protocol_version: String,
}

fn default_replace_retry_budget() -> u32 {
    MAXIMUM_REPLACE_RETRIES
}

fn default_site() -> String {
    "site-1".to_string()
}

fn default_node() -> String {
    "node-1".to_string()
}

fn default_protocol_version() -> String {
    ProtocolVersion::default().to_string()
}

impl GridConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: GridConfig =
            toml::from_str(&content).with_context(|| "failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.replace_retry_budget == 0 {
            anyhow::bail!("replace_retry_budget must be > 0");
        }

        if self.cluster.site.is_empty() {
            anyhow::bail!("cluster.site must not be empty");
        }
        if self.cluster.node.is_empty() {
            anyhow::bail!("cluster.node must not be empty");
        }
        if !self.cluster.members.is_empty()
            && !self.cluster.members.contains(&self.cluster.node)
        {
            anyhow::bail!(
                "cluster.members does not contain cluster.node {:?}",
                self.cluster.node
            );
        }

        for (i, store) in self.remote_stores.iter().enumerate() {
            if store.cache_name.is_empty() {
                anyhow::bail!("remote_stores[{}].cache_name must not be empty", i);
            }
            if store.endpoints.is_empty() {
                anyhow::bail!(
                    "remote_stores[{}] for cache {:?} has no endpoints",
                    i,
                    store.cache_name
                );
            }
            store
                .protocol_version
                .parse::<ProtocolVersion>()
                .with_context(|| {
                    format!(
                        "remote_stores[{}] for cache {:?} has an invalid protocol_version",
                        i, store.cache_name
                    )
                })?;
        }

        Ok(())
    }
}

impl RemoteStoreConfig {
    /// Parse the configured protocol version.
    pub fn parsed_protocol_version(&self) -> crate::core::error::GridResult<ProtocolVersion> {
        self.protocol_version.parse()
    }
}

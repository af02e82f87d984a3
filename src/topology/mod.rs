//! Cluster topology value objects.
//!
//! The topology describes where this node sits in the grid: which site
//! (datacenter) it runs in, its node name, and the current member layout.
//! Session stores use it to decide which node performs per-key maintenance:
//! keys are routed to a primary owner with a seeded hash over the member
//! list, the same way the grid routes keys to partitions.

pub mod helper;

use serde::{Deserialize, Serialize};
use std::hash::Hasher;
use twox_hash::XxHash64;

use crate::core::config::ClusterConfig;

/// Site/node layout of the grid as seen from this node.
///
/// A value object: obtained from the connection provider per call, never
/// updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyInfo {
    site: String,
    node: String,
    members: Vec<String>,
    hash_seed: u64,
}

impl TopologyInfo {
    /// Create a topology for the given site and node.
    ///
    /// An empty member list is treated as a single-node layout containing
    /// only the local node, so key ownership is always defined.
    pub fn new(
        site: impl Into<String>,
        node: impl Into<String>,
        members: Vec<String>,
        hash_seed: u64,
    ) -> Self {
        let node = node.into();
        let members = if members.is_empty() {
            vec![node.clone()]
        } else {
            members
        };
        Self {
            site: site.into(),
            node,
            members,
            hash_seed,
        }
    }

    /// Build a topology from the cluster configuration.
    pub fn from_config(config: &ClusterConfig) -> Self {
        Self::new(
            config.site.clone(),
            config.node.clone(),
            config.members.clone(),
            config.hash_seed,
        )
    }

    /// Site (datacenter) this node runs in.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// This node's name.
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Members in view order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Whether the layout has peers beyond the local node.
    pub fn is_clustered(&self) -> bool {
        self.members.len() > 1
    }

    /// The member that owns a key under the current layout.
    ///
    /// Routed with a seeded xxHash64 over the member count, so ownership is
    /// stable for a given layout and seed.
    pub fn primary_owner(&self, key: &[u8]) -> &str {
        let mut hasher = XxHash64::with_seed(self.hash_seed);
        hasher.write(key);
        let index = (hasher.finish() % self.members.len() as u64) as usize;
        &self.members[index]
    }

    /// Whether the local node owns a key under the current layout.
    pub fn is_primary_owner(&self, key: &[u8]) -> bool {
        self.primary_owner(key) == self.node
    }
}

impl std::fmt::Display for TopologyInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.site, self.node)
    }
}

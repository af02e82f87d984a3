//! Cluster membership and coordinator election.
//!
//! The transport is the cache manager's handle onto cluster membership. Its
//! absence means a non-clustered deployment; the cache has no peers and is
//! trivially its own coordinator.

use parking_lot::RwLock;

use crate::core::config::ClusterConfig;

/// Cluster-membership handle attached to a cache manager.
///
/// Implementations are owned by the external grid and must be thread-safe;
/// gridlink only reads from them.
pub trait Transport: Send + Sync {
    /// This node's name.
    fn local_node(&self) -> &str;

    /// Current members in view order.
    fn members(&self) -> Vec<String>;

    /// Whether this node is the elected cluster coordinator.
    fn is_coordinator(&self) -> bool;
}

/// Static membership view.
///
/// The first member in view order is the coordinator, matching the election
/// rule of the underlying cluster stack. Used for embedded deployments and
/// tests; membership can be swapped when the view changes.
pub struct ClusterView {
    local_node: String,
    members: RwLock<Vec<String>>,
}

impl ClusterView {
    /// Create a view with the given local node and membership.
    pub fn new(local_node: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            local_node: local_node.into(),
            members: RwLock::new(members),
        }
    }

    /// Build a view from the cluster configuration.
    ///
    /// A configuration with no members yields a single-node view containing
    /// only the local node.
    pub fn from_config(config: &ClusterConfig) -> Self {
        let members = if config.members.is_empty() {
            vec![config.node.clone()]
        } else {
            config.members.clone()
        };
        Self::new(config.node.clone(), members)
    }

    /// Replace the membership with a new view.
    pub fn update_members(&self, members: Vec<String>) {
        let mut current = self.members.write();
        tracing::info!(
            local_node = %self.local_node,
            old_size = current.len(),
            new_size = members.len(),
            "cluster view changed"
        );
        *current = members;
    }

    /// The current coordinator, if the view is non-empty.
    pub fn coordinator(&self) -> Option<String> {
        self.members.read().first().cloned()
    }
}

impl Transport for ClusterView {
    fn local_node(&self) -> &str {
        &self.local_node
    }

    fn members(&self) -> Vec<String> {
        self.members.read().clone()
    }

    fn is_coordinator(&self) -> bool {
        self.members
            .read()
            .first()
            .is_some_and(|first| *first == self.local_node)
    }
}

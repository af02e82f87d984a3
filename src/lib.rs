//! Gridlink - Session-layer bridge to an embedded/distributed cache grid.
//!
//! Gridlink sits between a session-management layer and the cache grid it
//! stores its state in. The grid itself (cache engine, cluster transport,
//! persistence backends) is an external collaborator; gridlink models the
//! surfaces of those collaborators and implements the query and conversion
//! policies session stores need: topology lookup, cluster-coordinator
//! detection, cross-datacenter remote-store discovery, and the
//! protocol-version-dependent hotrod expiration conversion.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Session Management Layer                    │
//! │         (session stores, persistence workers - external)        │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Topology Helpers                           │
//! │   remote stores │ coordinator │ topology │ hotrod conversion    │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Cache Grid Surface                         │
//! │   cache handles │ cache manager │ transport │ remote stores     │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                External Cache Grid (out of scope)               │
//! │         embedded caches │ cluster │ cross-DC endpoints          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! ## Core
//! - [`core::config`] - Configuration parsing and validation
//! - [`core::error`] - Error types
//! - [`core::time`] - Wall-clock abstraction
//!
//! ## Grid Surface
//! - [`grid`] - Tagged cache handles and the cache manager
//! - [`grid::transport`] - Cluster membership and coordinator election
//! - [`grid::persistence`] - Persistence store descriptors
//! - [`grid::remote`] - Remote caches, remote stores, protocol versions
//!
//! ## Session
//! - [`session`] - Session context and provider capabilities
//!
//! ## Topology
//! - [`topology`] - Topology value objects and key ownership
//! - [`topology::helper`] - The stateless query/convert operations
//!
//! # Key Policies
//!
//! - A cache manager without a transport is a non-clustered deployment; such
//!   a cache has no peers and is trivially its own coordinator.
//! - Hotrod protocol versions older than 3.0 reinterpret lifespans above
//!   30 days as absolute unix timestamps; callers must pre-convert large
//!   lifespans through [`topology::helper::to_hotrod_time_ms`].
//! - Whether a handle is embedded or remote is fixed where the handle is
//!   constructed, never re-derived by runtime type inspection.

// Core infrastructure
pub mod core;

// Cache grid surface model
pub mod grid;

// Session context and provider capabilities
pub mod session;

// Topology value objects and helper operations
pub mod topology;

// Re-exports for convenience
pub use self::core::{config, error, time};
pub use grid::{persistence, remote, transport};
pub use topology::helper::{
    is_coordinator, remote_cache, remote_stores, to_hotrod_time_ms, to_hotrod_time_ms_at,
    topology_info, HOTROD_LIFESPAN_CEILING_MS, MAXIMUM_REPLACE_RETRIES,
};
pub use topology::TopologyInfo;

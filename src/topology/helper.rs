//! Stateless query and conversion helpers for session stores.
//!
//! Every operation here is a single-shot, synchronous read against borrowed,
//! externally owned collaborators: no state, no retries, no logging. Callers
//! own failure handling; the one error these helpers surface is a missing
//! provider capability, propagated unchanged from the session context.

use std::sync::Arc;

use crate::core::error::GridResult;
use crate::core::time::{Clock, SystemClock};
use crate::grid::remote::{RemoteCache, RemoteStore};
use crate::grid::transport::Transport;
use crate::grid::CacheHandle;
use crate::session::SessionContext;
use crate::topology::TopologyInfo;

/// Retry budget for optimistic replace loops against the grid.
///
/// Callers performing compare-and-swap style updates retry up to this many
/// times before giving up. Exported for those callers; nothing in this
/// module retries. Deployments tune it through
/// [`GridConfig::replace_retry_budget`](crate::core::config::GridConfig),
/// which defaults to this value.
pub const MAXIMUM_REPLACE_RETRIES: u32 = 25;

/// Lifespans above this value (30 days in milliseconds) are reinterpreted as
/// absolute unix timestamps by hotrod protocol versions older than 3.0.
pub const HOTROD_LIFESPAN_CEILING_MS: i64 = 2_592_000_000;

/// The remote stores configured as persistence backends for a cache.
///
/// A non-empty result means the cache replicates to an external grid in
/// another datacenter. Remote handles have no embedded persistence manager,
/// so they always report no stores.
pub fn remote_stores(cache: &CacheHandle) -> Vec<Arc<RemoteStore>> {
    match cache {
        CacheHandle::Embedded(embedded) => embedded.persistence().remote_stores(),
        CacheHandle::Remote(_) => Vec::new(),
    }
}

/// The remote cache a cache replicates to, when a remote store is configured.
///
/// With several remote stores configured, the first in configuration order
/// wins.
pub fn remote_cache(cache: &CacheHandle) -> Option<Arc<RemoteCache>> {
    remote_stores(cache)
        .first()
        .map(|store| Arc::clone(store.remote_cache()))
}

/// The grid topology, looked up through the session's connection provider.
///
/// Fails when no connection provider is registered on the session.
pub fn topology_info(session: &SessionContext) -> GridResult<TopologyInfo> {
    Ok(session.connection_provider()?.topology_info())
}

/// True if this node is the cluster coordinator, or if the cache is local.
///
/// A cache manager without a transport is a non-clustered deployment: the
/// cache has no peers and is trivially its own coordinator. Remote handles
/// carry no transport either and answer the same way.
pub fn is_coordinator(cache: &CacheHandle) -> bool {
    match cache {
        CacheHandle::Embedded(embedded) => embedded
            .manager()
            .transport()
            .map_or(true, |transport| transport.is_coordinator()),
        CacheHandle::Remote(_) => true,
    }
}

/// Convert a lifespan to the value expected by the cache's remote endpoint.
///
/// Hotrod protocol versions older than 3.0 use the lifespan as the normal
/// expiration time when the value is 30 days or less, but treat bigger
/// values as unix timestamps. For such endpoints a too-large lifespan is
/// promoted to an absolute timestamp by adding the current wall-clock time;
/// embedded caches and modern endpoints get the input back unchanged.
pub fn to_hotrod_time_ms(cache: &CacheHandle, lifespan_ms: i64) -> i64 {
    to_hotrod_time_ms_at(cache, lifespan_ms, &SystemClock)
}

/// Clock-taking form of [`to_hotrod_time_ms`].
///
/// The conversion is a pure function of the handle, the lifespan, and one
/// reading of `clock`.
pub fn to_hotrod_time_ms_at(cache: &CacheHandle, lifespan_ms: i64, clock: &dyn Clock) -> i64 {
    if let CacheHandle::Remote(remote) = cache {
        if lifespan_ms > HOTROD_LIFESPAN_CEILING_MS
            && remote
                .protocol_version()
                .treats_large_lifespan_as_timestamp()
        {
            return clock.now_ms() + lifespan_ms;
        }
    }

    lifespan_ms
}

//! Session cache for connectivity lookups.
//!
//! Repeated searches from the same origin within one session reuse the
//! parsed destination set instead of refetching the timetable page.
//! Only successful lookups are cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::RouteReference;

use super::error::RouteError;
use super::provider::{ConnectivityProvider, ConnectivitySet};

/// Configuration for the connectivity cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 256,
        }
    }
}

/// Connectivity provider with an in-memory cache in front of it.
pub struct CachedConnectivity<P> {
    inner: P,
    cache: MokaCache<RouteReference, Arc<ConnectivitySet>>,
}

impl<P: ConnectivityProvider> CachedConnectivity<P> {
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Access the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of destination sets currently cached.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl<P: ConnectivityProvider> ConnectivityProvider for CachedConnectivity<P> {
    async fn destinations(&self, route: &RouteReference) -> Result<ConnectivitySet, RouteError> {
        if let Some(cached) = self.cache.get(route).await {
            trace!(route = %route, "connectivity cache hit");
            return Ok(cached.as_ref().clone());
        }

        let set = self.inner.destinations(route).await?;
        self.cache
            .insert(route.clone(), Arc::new(set.clone()))
            .await;

        Ok(set)
    }
}

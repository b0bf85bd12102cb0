//! Cached order analytics.

use std::time::{Duration, Instant};

use chrono::Utc;
use order_store::OrderStore;

use crate::cache::TtlCache;
use crate::error::Result;
use crate::summary::{AnalyticsSummary, summarize};

const CACHE_KEY: &str = "order_analytics";

/// Computes order analytics from the store and caches the snapshot.
///
/// The cache holds a single entry. Concurrent misses may each recompute;
/// the result is the same either way.
pub struct OrderAnalyticsAggregator<S: OrderStore> {
    store: S,
    cache: TtlCache<&'static str, AnalyticsSummary>,
}

impl<S: OrderStore> OrderAnalyticsAggregator<S> {
    /// How long a computed snapshot is served before recomputing.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

    pub fn new(store: S) -> Self {
        Self::with_ttl(store, Self::DEFAULT_TTL)
    }

    pub fn with_ttl(store: S, ttl: Duration) -> Self {
        Self {
            store,
            cache: TtlCache::new(ttl),
        }
    }

    /// Returns the analytics summary, from cache when fresh.
    ///
    /// A cache hit does not touch the store. Store errors are not cached.
    #[tracing::instrument(skip(self))]
    pub async fn get_analytics(&self) -> Result<AnalyticsSummary> {
        if let Some(summary) = self.cache.get(&CACHE_KEY).await {
            metrics::counter!("analytics_cache_hits_total").increment(1);
            tracing::debug!("analytics cache hit");
            return Ok(summary);
        }

        metrics::counter!("analytics_cache_misses_total").increment(1);
        tracing::debug!("analytics cache miss");

        let start = Instant::now();
        let orders = self.store.get_all().await?;
        let summary = summarize(&orders, Utc::now());
        metrics::histogram!("analytics_compute_duration_seconds")
            .record(start.elapsed().as_secs_f64());
        tracing::info!(order_count = orders.len(), "analytics recomputed");

        self.cache.insert(CACHE_KEY, summary).await;
        Ok(summary)
    }

    /// Drops the cached snapshot so the next call recomputes.
    pub async fn invalidate(&self) {
        self.cache.invalidate(&CACHE_KEY).await;
    }
}

//! Order analytics.
//!
//! - [`summarize`] derives an [`AnalyticsSummary`] from a set of orders
//! - [`OrderAnalyticsAggregator`] reads the order store and caches the
//!   summary for a short TTL
//! - [`TtlCache`] is the expiring cache behind it

pub mod aggregator;
pub mod cache;
pub mod error;
pub mod summary;

pub use aggregator::OrderAnalyticsAggregator;
pub use cache::TtlCache;
pub use error::{AnalyticsError, Result};
pub use summary::{AnalyticsSummary, summarize};

//! Analytics error types.

use thiserror::Error;

/// Errors that can occur while computing analytics.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Reading the order set failed.
    #[error("Order store error: {0}")]
    Store(#[from] order_store::StoreError),
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

//! Service error types.

use domain::OrderError;
use order_store::StoreError;
use thiserror::Error;

/// Errors that can occur in the order services.
///
/// Missing orders, missing profiles and unknown status names are not errors;
/// they are reported through the outcome types.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Order store or profile lookup error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Domain rule violation.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

/// Convenience type alias for service results.
pub type Result<T> = std::result::Result<T, ServiceError>;

//! Domain error types.

use thiserror::Error;

use crate::order::{Money, OrderStatus};

/// Errors that can occur during order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The transition policy does not allow this status change.
    #[error("Invalid status transition: cannot move from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// A money value that must be non-negative was negative.
    #[error("Invalid amount for {field}: {amount} (must not be negative)")]
    NegativeAmount { field: &'static str, amount: Money },
}

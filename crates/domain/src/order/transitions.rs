//! Legal single-hop status changes.

use super::OrderStatus;

/// Decides whether an order may move from one status to another.
pub trait TransitionPolicy: Send + Sync {
    /// Returns true if `from -> to` is a legal single-hop transition.
    fn can_transition(&self, from: OrderStatus, to: OrderStatus) -> bool;
}

/// The fixed order status transition matrix.
///
/// Only single-hop transitions are legal; reaching a later status takes
/// one call per hop. See [`OrderStatus::allowed_transitions`] for the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusTransitionMatrix;

impl StatusTransitionMatrix {
    pub fn new() -> Self {
        Self
    }
}

impl TransitionPolicy for StatusTransitionMatrix {
    fn can_transition(&self, from: OrderStatus, to: OrderStatus) -> bool {
        from.allowed_transitions().contains(&to)
    }
}

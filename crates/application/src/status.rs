//! Order status advancement.

use common::OrderId;
use domain::{OrderError, OrderStatus, StatusTransitionMatrix};
use order_store::OrderStore;

use crate::error::Result;

/// Result of a status advance request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The order moved and was persisted.
    Advanced { from: OrderStatus, to: OrderStatus },

    /// No order has this id.
    NotFound,

    /// The requested status name matches no known status.
    InvalidStatus(String),

    /// The matrix does not allow this hop.
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}

impl AdvanceOutcome {
    /// Returns true if the order was advanced.
    pub fn is_advanced(&self) -> bool {
        matches!(self, AdvanceOutcome::Advanced { .. })
    }

    /// Short label for a rejected request, used in logs and metrics.
    pub fn rejection_reason(&self) -> Option<&'static str> {
        match self {
            AdvanceOutcome::Advanced { .. } => None,
            AdvanceOutcome::NotFound => Some("not_found"),
            AdvanceOutcome::InvalidStatus(_) => Some("invalid_status"),
            AdvanceOutcome::InvalidTransition { .. } => Some("invalid_transition"),
        }
    }
}

/// Service for moving stored orders through their lifecycle.
pub struct OrderStatusService<S: OrderStore> {
    store: S,
    matrix: StatusTransitionMatrix,
}

impl<S: OrderStore> OrderStatusService<S> {
    /// Creates a new status service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            matrix: StatusTransitionMatrix::new(),
        }
    }

    /// Advances an order to the status named `new_status`.
    ///
    /// Returns `Ok(false)` if the order is missing, the name is unknown, or
    /// the transition is not allowed; use [`Self::try_advance_status`] to
    /// tell these apart. Store failures are returned as errors.
    pub async fn advance_status(&self, order_id: OrderId, new_status: &str) -> Result<bool> {
        Ok(self
            .try_advance_status(order_id, new_status)
            .await?
            .is_advanced())
    }

    /// Advances an order to the status named `new_status`, reporting why a
    /// request was rejected.
    #[tracing::instrument(skip(self))]
    pub async fn try_advance_status(
        &self,
        order_id: OrderId,
        new_status: &str,
    ) -> Result<AdvanceOutcome> {
        let Some(mut order) = self.store.get(order_id).await? else {
            return Ok(rejected(AdvanceOutcome::NotFound));
        };

        let Some(target) = OrderStatus::parse(new_status) else {
            return Ok(rejected(AdvanceOutcome::InvalidStatus(
                new_status.to_string(),
            )));
        };

        let from = order.status();
        match order.change_status(target, &self.matrix) {
            Ok(()) => {}
            Err(OrderError::InvalidTransition { from, to }) => {
                return Ok(rejected(AdvanceOutcome::InvalidTransition { from, to }));
            }
            Err(e) => return Err(e.into()),
        }

        self.store.update(order).await?;

        metrics::counter!("order_status_transitions_total").increment(1);
        tracing::info!(%order_id, %from, to = %target, "order status advanced");

        Ok(AdvanceOutcome::Advanced { from, to: target })
    }
}

fn rejected(outcome: AdvanceOutcome) -> AdvanceOutcome {
    let reason = outcome.rejection_reason().unwrap_or("unknown");
    metrics::counter!("order_status_rejections_total", "reason" => reason).increment(1);
    tracing::debug!(reason, ?outcome, "order status advance rejected");
    outcome
}

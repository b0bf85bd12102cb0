//! Applying promotions to stored orders.

use common::OrderId;
use domain::{CustomerProfile, Order, PromotionEngine, PromotionResult};
use order_store::{OrderStore, ProfileLookup};

use crate::error::Result;

/// Result of applying promotions to a stored order.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscountOutcome {
    /// Promotions were evaluated and the order was updated.
    Applied(PromotionResult),

    /// No order has this id.
    OrderNotFound,

    /// The order's customer has no profile.
    ProfileNotFound,
}

/// Evaluates promotions for orders and records the outcome on them.
pub struct PromotionService<S: OrderStore, P: ProfileLookup> {
    orders: S,
    profiles: P,
    engine: PromotionEngine,
}

impl<S: OrderStore, P: ProfileLookup> PromotionService<S, P> {
    /// Creates a new promotion service.
    pub fn new(orders: S, profiles: P, engine: PromotionEngine) -> Self {
        Self {
            orders,
            profiles,
            engine,
        }
    }

    /// Evaluates the promotions `order` would receive. Nothing is stored.
    pub fn apply_promotions(&self, order: &Order, profile: &CustomerProfile) -> PromotionResult {
        self.engine.apply_discounts(order, profile)
    }

    /// Evaluates promotions for a stored order and saves the discounted total
    /// and applied promotion names on it.
    ///
    /// Applying twice overwrites the first result; discounts always start
    /// from the order's original total.
    #[tracing::instrument(skip(self))]
    pub async fn apply_to_order(&self, order_id: OrderId) -> Result<DiscountOutcome> {
        let Some(mut order) = self.orders.get(order_id).await? else {
            tracing::debug!("order not found");
            return Ok(DiscountOutcome::OrderNotFound);
        };

        let Some(profile) = self.profiles.get(order.customer_id()).await? else {
            tracing::debug!(customer_id = %order.customer_id(), "customer profile not found");
            return Ok(DiscountOutcome::ProfileNotFound);
        };

        let result = self.apply_promotions(&order, &profile);
        order.apply_discount(&result);
        self.orders.update(order).await?;

        metrics::counter!("promotions_applied_total")
            .increment(result.applied_promotions().len() as u64);
        tracing::info!(
            %order_id,
            original = %result.original_total(),
            discounted = %result.discounted_total(),
            promotions = ?result.applied_promotions(),
            "promotions applied"
        );

        Ok(DiscountOutcome::Applied(result))
    }
}

//! Order listing with promotion previews.

use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId};
use domain::{Money, Order, OrderStatus, PromotionEngine};
use order_store::{OrderStore, ProfileLookup};
use serde::Serialize;

use crate::error::Result;

/// Read model for a stored order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub total_amount: Money,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub fulfilled_at: Option<DateTime<Utc>>,
    pub discounted_total: Money,
    pub applied_promotions: Vec<String>,
    /// Promotions the order would receive if discounts were applied now.
    /// Empty when the customer has no profile.
    pub potential_promotions: Vec<String>,
}

impl OrderView {
    fn from_order(order: Order, potential_promotions: Vec<String>) -> Self {
        Self {
            id: order.id(),
            customer_id: order.customer_id(),
            total_amount: order.total_amount(),
            status: order.status(),
            created_at: order.created_at(),
            fulfilled_at: order.fulfilled_at(),
            discounted_total: order.discounted_total(),
            applied_promotions: order.applied_promotions().to_vec(),
            potential_promotions,
        }
    }
}

/// Lists stored orders.
pub struct OrderQueryService<S: OrderStore, P: ProfileLookup> {
    orders: S,
    profiles: P,
    engine: PromotionEngine,
}

impl<S: OrderStore, P: ProfileLookup> OrderQueryService<S, P> {
    pub fn new(orders: S, profiles: P, engine: PromotionEngine) -> Self {
        Self {
            orders,
            profiles,
            engine,
        }
    }

    /// Returns every order, oldest first.
    pub async fn list_orders(&self) -> Result<Vec<OrderView>> {
        let orders = self.orders.get_all().await?;
        self.to_views(orders).await
    }

    /// Returns one customer's orders, oldest first.
    pub async fn orders_for_customer(&self, customer_id: CustomerId) -> Result<Vec<OrderView>> {
        let orders = self.orders.get_by_customer(customer_id).await?;
        self.to_views(orders).await
    }

    async fn to_views(&self, orders: Vec<Order>) -> Result<Vec<OrderView>> {
        let mut views = Vec::with_capacity(orders.len());
        for order in orders {
            let potential = match self.profiles.get(order.customer_id()).await? {
                Some(profile) => self
                    .engine
                    .apply_discounts(&order, &profile)
                    .into_applied_promotions(),
                None => Vec::new(),
            };
            views.push(OrderView::from_order(order, potential));
        }
        Ok(views)
    }
}

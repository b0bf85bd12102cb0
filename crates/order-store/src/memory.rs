use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{CustomerId, OrderId};
use domain::{CustomerProfile, Order};
use tokio::sync::RwLock;

use crate::{
    Result,
    store::{OrderStore, ProfileLookup},
};

/// In-memory order store.
///
/// Cloning is cheap and every clone shares the same orders. Each call takes
/// the lock once, so a single `update` is atomic; a get-then-update sequence
/// across two calls is not.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of orders stored.
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Returns true if no orders are stored.
    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }

    /// Removes every order.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

fn sorted(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by_key(|o| (o.created_at(), o.id()));
    orders
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get(&self, id: OrderId) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await.values().cloned().collect();
        Ok(sorted(orders))
    }

    async fn update(&self, order: Order) -> Result<()> {
        tracing::trace!(order_id = %order.id(), status = %order.status(), "storing order");
        self.orders.write().await.insert(order.id(), order);
        Ok(())
    }

    async fn get_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .await
            .values()
            .filter(|o| o.customer_id() == customer_id)
            .cloned()
            .collect();
        Ok(sorted(orders))
    }
}

/// In-memory customer profile store.
#[derive(Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<HashMap<CustomerId, CustomerProfile>>>,
}

impl InMemoryProfileStore {
    /// Creates a new empty profile store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `profile`, replacing the customer's previous profile whole.
    pub async fn insert(&self, profile: CustomerProfile) {
        self.profiles
            .write()
            .await
            .insert(profile.customer_id(), profile);
    }

    /// Returns the number of profiles stored.
    pub async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl ProfileLookup for InMemoryProfileStore {
    async fn get(&self, customer_id: CustomerId) -> Result<Option<CustomerProfile>> {
        Ok(self.profiles.read().await.get(&customer_id).copied())
    }
}

use async_trait::async_trait;
use common::{CustomerId, OrderId};
use domain::{CustomerProfile, Order};

use crate::Result;

/// Core trait for order store implementations.
///
/// All implementations must be thread-safe (Send + Sync). The business
/// core does not serialize read-modify-write sequences itself, so a store
/// shared by concurrent writers must make `update` atomic per order id.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Retrieves an order by id.
    ///
    /// Returns None if the order doesn't exist.
    async fn get(&self, id: OrderId) -> Result<Option<Order>>;

    /// Retrieves every stored order.
    async fn get_all(&self) -> Result<Vec<Order>>;

    /// Stores `order`, replacing any order with the same id.
    async fn update(&self, order: Order) -> Result<()>;

    /// Retrieves all orders placed by a customer.
    ///
    /// Returns an empty list if the customer has no orders.
    async fn get_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>>;
}

/// Extension trait providing convenience methods for order stores.
#[async_trait]
pub trait OrderStoreExt: OrderStore {
    /// Stores every order in `orders`.
    async fn update_all(&self, orders: Vec<Order>) -> Result<()> {
        for order in orders {
            self.update(order).await?;
        }
        Ok(())
    }

    /// Checks if an order exists.
    async fn contains(&self, id: OrderId) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }
}

// Blanket implementation for all OrderStore implementations
impl<T: OrderStore + ?Sized> OrderStoreExt for T {}

/// Read access to customer profiles.
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    /// Retrieves the profile for a customer.
    ///
    /// Returns None if the customer is unknown.
    async fn get(&self, customer_id: CustomerId) -> Result<Option<CustomerProfile>>;
}

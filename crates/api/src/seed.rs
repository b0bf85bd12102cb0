//! Demo customers and orders that exercise every promotion rule.

use chrono::{DateTime, Duration, Utc};
use common::{CustomerId, OrderId};
use domain::{CustomerProfile, CustomerSegment, Money, Order, OrderError};
use order_store::{InMemoryProfileStore, OrderStore, OrderStoreExt, StoreError};
use thiserror::Error;

pub const VIP_CUSTOMER: CustomerId = CustomerId::from_u128(0x11111111_1111_1111_1111_111111111111);
pub const NEW_CUSTOMER: CustomerId = CustomerId::from_u128(0x22222222_2222_2222_2222_222222222222);
pub const REGULAR_CUSTOMER: CustomerId =
    CustomerId::from_u128(0x33333333_3333_3333_3333_333333333333);

const REGULAR_ORDER_COUNT: i64 = 10;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid seed data: {0}")]
    Order(#[from] OrderError),
}

/// Inserts the demo profiles and orders. Returns the number of orders written.
///
/// Profiles keep their seeded history; the demo orders do not count towards
/// it, so the New customer still qualifies for a first order discount.
///
/// - New customer: one 100.00 order from yesterday (first order discount)
/// - Regular customer: one 600.00 order from two days ago (high value discount)
/// - VIP customer: one 200.00 order from three days ago (VIP discount)
/// - Ten regular orders between 20.00 and 420.00, four to thirteen days old
pub async fn seed_demo_data<S: OrderStore>(
    orders: &S,
    profiles: &InMemoryProfileStore,
    now: DateTime<Utc>,
) -> Result<usize, SeedError> {
    profiles
        .insert(CustomerProfile::new(
            VIP_CUSTOMER,
            CustomerSegment::Vip,
            12,
            Money::from_cents(75_000),
        )?)
        .await;
    profiles
        .insert(CustomerProfile::new(
            NEW_CUSTOMER,
            CustomerSegment::New,
            0,
            Money::zero(),
        )?)
        .await;
    profiles
        .insert(CustomerProfile::new(
            REGULAR_CUSTOMER,
            CustomerSegment::Regular,
            3,
            Money::from_cents(24_000),
        )?)
        .await;

    let mut seeded = vec![
        placed(NEW_CUSTOMER, Money::from_major(100), now - Duration::days(1))?,
        placed(REGULAR_CUSTOMER, Money::from_major(600), now - Duration::days(2))?,
        placed(VIP_CUSTOMER, Money::from_major(200), now - Duration::days(3))?,
    ];

    for i in 0..REGULAR_ORDER_COUNT {
        let customer = match i % 3 {
            0 => VIP_CUSTOMER,
            1 => NEW_CUSTOMER,
            _ => REGULAR_CUSTOMER,
        };
        seeded.push(placed(
            customer,
            regular_amount(i),
            now - Duration::days(4 + i),
        )?);
    }

    let count = seeded.len();
    orders.update_all(seeded).await?;
    tracing::info!(orders = count, "seeded demo data");
    Ok(count)
}

fn placed(customer_id: CustomerId, total: Money, at: DateTime<Utc>) -> Result<Order, OrderError> {
    Order::placed_at(OrderId::new(), customer_id, total, at)
}

/// Spreads the regular orders over 20.00..420.00 without a random source.
fn regular_amount(i: i64) -> Money {
    Money::from_cents(2_000 + (i * 17_389 + 1_234) % 40_000)
}

#[cfg(test)]
mod tests {
    use domain::PromotionEngine;
    use order_store::{InMemoryOrderStore, ProfileLookup};

    use super::*;

    async fn seeded() -> (InMemoryOrderStore, InMemoryProfileStore) {
        let orders = InMemoryOrderStore::new();
        let profiles = InMemoryProfileStore::new();
        let count = seed_demo_data(&orders, &profiles, Utc::now()).await.unwrap();
        assert_eq!(count, 13);
        (orders, profiles)
    }

    #[tokio::test]
    async fn test_seeds_profiles_and_orders() {
        let (orders, profiles) = seeded().await;

        assert_eq!(orders.len().await, 13);
        assert_eq!(profiles.count().await, 3);

        let vip = profiles.get(VIP_CUSTOMER).await.unwrap().unwrap();
        assert_eq!(vip.past_order_count(), 12);
        assert_eq!(vip.total_order_value(), Money::from_major(750));

        let new = profiles.get(NEW_CUSTOMER).await.unwrap().unwrap();
        assert_eq!(new.past_order_count(), 0);

        let regular = profiles.get(REGULAR_CUSTOMER).await.unwrap().unwrap();
        assert_eq!(regular.past_order_count(), 3);
    }

    #[test]
    fn test_regular_amounts_stay_in_range() {
        for i in 0..REGULAR_ORDER_COUNT {
            let amount = regular_amount(i);
            assert!(amount >= Money::from_major(20));
            assert!(amount < Money::from_major(420));
        }
    }

    #[tokio::test]
    async fn test_seeded_orders_span_thirteen_days() {
        let (orders, _) = seeded().await;
        let all = orders.get_all().await.unwrap();

        let oldest = all.first().unwrap().created_at();
        let newest = all.last().unwrap().created_at();
        assert_eq!((newest - oldest).num_days(), 12);
    }

    async fn seeded_order(
        orders: &InMemoryOrderStore,
        customer: CustomerId,
        total: Money,
    ) -> Order {
        orders
            .get_by_customer(customer)
            .await
            .unwrap()
            .into_iter()
            .find(|o| o.total_amount() == total)
            .unwrap()
    }

    #[tokio::test]
    async fn test_new_customer_order_gets_first_order_discount() {
        let (orders, profiles) = seeded().await;
        let engine = PromotionEngine::with_default_rules();

        let first = seeded_order(&orders, NEW_CUSTOMER, Money::from_major(100)).await;
        let profile = profiles.get(NEW_CUSTOMER).await.unwrap().unwrap();

        let result = engine.apply_discounts(&first, &profile);
        assert_eq!(result.applied_promotions(), ["First Order Discount".to_string()]);
        assert_eq!(result.discounted_total(), Money::from_major(90));
    }

    #[tokio::test]
    async fn test_vip_order_gets_vip_discount() {
        let (orders, profiles) = seeded().await;
        let engine = PromotionEngine::with_default_rules();

        let vip_order = seeded_order(&orders, VIP_CUSTOMER, Money::from_major(200)).await;
        let profile = profiles.get(VIP_CUSTOMER).await.unwrap().unwrap();

        let result = engine.apply_discounts(&vip_order, &profile);
        assert!(
            result
                .applied_promotions()
                .contains(&"VIP Discount".to_string())
        );
    }

    #[tokio::test]
    async fn test_high_value_order_matches_promotions() {
        let (orders, profiles) = seeded().await;
        let engine = PromotionEngine::with_default_rules();

        let high_value = seeded_order(&orders, REGULAR_CUSTOMER, Money::from_major(600)).await;
        let profile = profiles.get(REGULAR_CUSTOMER).await.unwrap().unwrap();

        let result = engine.apply_discounts(&high_value, &profile);
        assert_eq!(
            result.applied_promotions(),
            [
                "High Value Order Discount".to_string(),
                "Loyalty Discount".to_string(),
            ]
        );
    }
}

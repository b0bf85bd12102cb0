//! Order entity.

use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId};
use serde::Serialize;

use crate::error::OrderError;
use crate::promotion::PromotionResult;

use super::{Money, OrderStatus, TransitionPolicy};

/// A customer purchase with a monetary total and a lifecycle status.
///
/// The total is fixed at creation. Status changes go through a
/// [`TransitionPolicy`]; discounts are applied from a [`PromotionResult`].
/// Serialize-only: every value goes through the validating constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    total_amount: Money,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    fulfilled_at: Option<DateTime<Utc>>,
    discounted_total: Money,
    /// Rule names in evaluation order.
    applied_promotions: Vec<String>,
}

impl Order {
    /// Creates a pending order placed now.
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        total_amount: Money,
    ) -> Result<Self, OrderError> {
        Self::placed_at(id, customer_id, total_amount, Utc::now())
    }

    /// Creates a pending order with an explicit creation time.
    ///
    /// Fails if `total_amount` is negative.
    pub fn placed_at(
        id: OrderId,
        customer_id: CustomerId,
        total_amount: Money,
        created_at: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        if total_amount.is_negative() {
            return Err(OrderError::NegativeAmount {
                field: "total_amount",
                amount: total_amount,
            });
        }

        Ok(Self {
            id,
            customer_id,
            total_amount,
            status: OrderStatus::Pending,
            created_at,
            fulfilled_at: None,
            discounted_total: total_amount,
            applied_promotions: Vec::new(),
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the most recent move into Delivered or Closed.
    pub fn fulfilled_at(&self) -> Option<DateTime<Utc>> {
        self.fulfilled_at
    }

    pub fn discounted_total(&self) -> Money {
        self.discounted_total
    }

    /// Total minus discounted total.
    pub fn discount_amount(&self) -> Money {
        self.total_amount - self.discounted_total
    }

    pub fn applied_promotions(&self) -> &[String] {
        &self.applied_promotions
    }

    /// Moves the order to `new_status`, stamping the fulfillment time now.
    ///
    /// Returns [`OrderError::InvalidTransition`] if `policy` rejects the hop.
    /// This is the trusted internal path; user input goes through the
    /// status service, which checks first.
    pub fn change_status<P>(&mut self, new_status: OrderStatus, policy: &P) -> Result<(), OrderError>
    where
        P: TransitionPolicy + ?Sized,
    {
        self.change_status_at(new_status, policy, Utc::now())
    }

    /// Same as [`Order::change_status`] with an explicit clock reading.
    pub fn change_status_at<P>(
        &mut self,
        new_status: OrderStatus,
        policy: &P,
        now: DateTime<Utc>,
    ) -> Result<(), OrderError>
    where
        P: TransitionPolicy + ?Sized,
    {
        if !policy.can_transition(self.status, new_status) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: new_status,
            });
        }

        self.status = new_status;

        // Returned -> Closed after a delivery stamps again.
        if new_status.is_fulfilled() {
            self.fulfilled_at = Some(now);
        }

        Ok(())
    }

    /// Overwrites the discounted total and applied promotions from `result`.
    pub fn apply_discount(&mut self, result: &PromotionResult) {
        self.discounted_total = result.discounted_total();
        self.applied_promotions = result.applied_promotions().to_vec();
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::order::StatusTransitionMatrix;

    fn create_order(total_cents: i64) -> Order {
        Order::new(
            OrderId::new(),
            CustomerId::new(),
            Money::from_cents(total_cents),
        )
        .unwrap()
    }

    #[test]
    fn test_new_order_defaults() {
        let order = create_order(10_000);
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.discounted_total(), order.total_amount());
        assert!(order.applied_promotions().is_empty());
        assert!(order.fulfilled_at().is_none());
        assert!(order.discount_amount().is_zero());
    }

    #[test]
    fn test_new_order_rejects_negative_total() {
        let result = Order::new(OrderId::new(), CustomerId::new(), Money::from_cents(-1));
        assert!(matches!(
            result,
            Err(OrderError::NegativeAmount {
                field: "total_amount",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_total_is_allowed() {
        let order = create_order(0);
        assert!(order.total_amount().is_zero());
    }

    #[test]
    fn test_change_status_valid_transitions() {
        let matrix = StatusTransitionMatrix::new();
        let mut order = create_order(10_000);

        order.change_status(OrderStatus::Confirmed, &matrix).unwrap();
        assert_eq!(order.status(), OrderStatus::Confirmed);
        assert!(order.fulfilled_at().is_none());

        order.change_status(OrderStatus::Shipped, &matrix).unwrap();
        assert_eq!(order.status(), OrderStatus::Shipped);
        assert!(order.fulfilled_at().is_none());

        order.change_status(OrderStatus::Delivered, &matrix).unwrap();
        assert_eq!(order.status(), OrderStatus::Delivered);
        let fulfilled = order.fulfilled_at().expect("fulfilled_at stamped");
        assert!(fulfilled >= order.created_at());
    }

    #[test]
    fn test_change_status_invalid_transition_leaves_order_untouched() {
        let matrix = StatusTransitionMatrix::new();
        let mut order = create_order(10_000);
        let before = order.clone();

        let err = order
            .change_status(OrderStatus::Delivered, &matrix)
            .unwrap_err();

        assert!(matches!(
            err,
            OrderError::InvalidTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Delivered,
            }
        ));
        assert_eq!(order, before);
    }

    #[test]
    fn test_terminal_status_rejects_everything() {
        let matrix = StatusTransitionMatrix::new();
        let mut order = create_order(10_000);
        order.change_status(OrderStatus::Cancelled, &matrix).unwrap();

        for status in OrderStatus::ALL {
            assert!(order.change_status(status, &matrix).is_err());
        }
        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert!(order.fulfilled_at().is_none());
    }

    #[test]
    fn test_non_fulfilling_transition_keeps_fulfilled_at() {
        let matrix = StatusTransitionMatrix::new();
        let mut order = create_order(10_000);
        let t0 = order.created_at();

        order
            .change_status_at(OrderStatus::Confirmed, &matrix, t0 + Duration::hours(1))
            .unwrap();
        order
            .change_status_at(OrderStatus::Shipped, &matrix, t0 + Duration::hours(2))
            .unwrap();
        order
            .change_status_at(OrderStatus::Delivered, &matrix, t0 + Duration::hours(3))
            .unwrap();
        order
            .change_status_at(OrderStatus::Returned, &matrix, t0 + Duration::hours(4))
            .unwrap();

        assert_eq!(order.fulfilled_at(), Some(t0 + Duration::hours(3)));
    }

    #[test]
    fn test_closing_after_return_restamps_fulfilled_at() {
        let matrix = StatusTransitionMatrix::new();
        let mut order = create_order(10_000);
        let t0 = order.created_at();

        for (hours, status) in [
            (1, OrderStatus::Confirmed),
            (2, OrderStatus::Shipped),
            (3, OrderStatus::Delivered),
            (4, OrderStatus::Returned),
            (5, OrderStatus::Closed),
        ] {
            order
                .change_status_at(status, &matrix, t0 + Duration::hours(hours))
                .unwrap();
        }

        assert_eq!(order.status(), OrderStatus::Closed);
        assert_eq!(order.fulfilled_at(), Some(t0 + Duration::hours(5)));
    }

    #[test]
    fn test_change_status_accepts_trait_object_policy() {
        let policy: Box<dyn TransitionPolicy> = Box::new(StatusTransitionMatrix::new());
        let mut order = create_order(10_000);
        order
            .change_status(OrderStatus::Confirmed, policy.as_ref())
            .unwrap();
        assert_eq!(order.status(), OrderStatus::Confirmed);
    }

    #[test]
    fn test_apply_discount_overwrites_totals_and_promotions() {
        let mut order = create_order(10_000);
        let result = PromotionResult::new(
            Money::from_cents(10_000),
            Money::from_cents(9_000),
            vec!["TestPromo".to_string()],
        );

        order.apply_discount(&result);

        assert_eq!(order.discounted_total(), Money::from_cents(9_000));
        assert_eq!(order.applied_promotions(), ["TestPromo".to_string()]);
        assert_eq!(order.discount_amount(), Money::from_cents(1_000));

        let none = PromotionResult::new(
            Money::from_cents(10_000),
            Money::from_cents(10_000),
            Vec::new(),
        );
        order.apply_discount(&none);
        assert_eq!(order.discounted_total(), order.total_amount());
        assert!(order.applied_promotions().is_empty());
    }

    #[test]
    fn test_serialization() {
        let order = create_order(12_345);
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["id"], order.id().to_string());
        assert_eq!(json["total_amount"], "123.45");
        assert_eq!(json["discounted_total"], "123.45");
        assert_eq!(json["status"], "Pending");
        assert!(json["fulfilled_at"].is_null());
        assert_eq!(json["applied_promotions"], serde_json::json!([]));
    }
}

//! Promotion engine.

use std::sync::Arc;

use crate::order::{CustomerProfile, Money, Order};

use super::{
    FirstOrderDiscount, HighValueOrderDiscount, LoyaltyDiscount, PromotionResult, PromotionRule,
    VipDiscount,
};

/// Runs an ordered list of promotion rules over an order.
///
/// Discounts are additive: each matching rule's discount is computed on the
/// order's original total, and the sum is subtracted once, floored at zero.
#[derive(Clone, Default)]
pub struct PromotionEngine {
    rules: Vec<Arc<dyn PromotionRule>>,
}

impl PromotionEngine {
    /// Creates an engine with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the shipped rules, in registration order:
    /// first order, high value, loyalty, VIP.
    pub fn with_default_rules() -> Self {
        let mut engine = Self::new();
        engine.register(Arc::new(FirstOrderDiscount));
        engine.register(Arc::new(HighValueOrderDiscount));
        engine.register(Arc::new(LoyaltyDiscount));
        engine.register(Arc::new(VipDiscount));
        engine
    }

    /// Appends a rule. Rules are evaluated in registration order.
    pub fn register(&mut self, rule: Arc<dyn PromotionRule>) {
        self.rules.push(rule);
    }

    /// Returns the registered rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Evaluates every rule against `order` and `profile`.
    ///
    /// Rules that match but produce a non-positive discount are not recorded.
    pub fn apply_discounts(&self, order: &Order, profile: &CustomerProfile) -> PromotionResult {
        let mut applied = Vec::new();
        let mut total_discount = Money::zero();

        for rule in &self.rules {
            if !rule.is_match(order, profile) {
                continue;
            }

            let discount = rule.calculate_discount(order);
            tracing::trace!(rule = rule.name(), %discount, "promotion rule matched");
            if discount.is_positive() {
                applied.push(rule.name().to_string());
                total_discount += discount;
            }
        }

        let discounted_total = (order.total_amount() - total_discount).floor_at_zero();

        PromotionResult::new(order.total_amount(), discounted_total, applied)
    }
}

impl FromIterator<Arc<dyn PromotionRule>> for PromotionEngine {
    fn from_iter<I: IntoIterator<Item = Arc<dyn PromotionRule>>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for PromotionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromotionEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use common::{CustomerId, OrderId};

    use super::*;
    use crate::order::CustomerSegment;

    fn order(total: Money) -> Order {
        Order::new(OrderId::new(), CustomerId::new(), total).unwrap()
    }

    fn profile(segment: CustomerSegment, past_orders: u32, total_value: i64) -> CustomerProfile {
        CustomerProfile::new(
            CustomerId::new(),
            segment,
            past_orders,
            Money::from_major(total_value),
        )
        .unwrap()
    }

    /// Matches everything and grants a fixed amount.
    struct FlatDiscount {
        name: &'static str,
        amount: Money,
    }

    impl PromotionRule for FlatDiscount {
        fn name(&self) -> &str {
            self.name
        }

        fn is_match(&self, _order: &Order, _profile: &CustomerProfile) -> bool {
            true
        }

        fn calculate_discount(&self, _order: &Order) -> Money {
            self.amount
        }
    }

    fn flat(name: &'static str, major: i64) -> Arc<dyn PromotionRule> {
        Arc::new(FlatDiscount {
            name,
            amount: Money::from_major(major),
        })
    }

    #[test]
    fn test_default_rules_registration_order() {
        let engine = PromotionEngine::with_default_rules();
        assert_eq!(
            engine.rule_names(),
            vec![
                "First Order Discount",
                "High Value Order Discount",
                "Loyalty Discount",
                "VIP Discount",
            ]
        );
    }

    #[test]
    fn test_no_rules_returns_original_total() {
        let engine = PromotionEngine::new();
        for segment in [
            CustomerSegment::New,
            CustomerSegment::Regular,
            CustomerSegment::Vip,
        ] {
            let order = order(Money::from_major(100));
            let result = engine.apply_discounts(&order, &profile(segment, 0, 10_000));
            assert_eq!(result.original_total(), Money::from_major(100));
            assert_eq!(result.discounted_total(), Money::from_major(100));
            assert!(result.applied_promotions().is_empty());
            assert_eq!(result, PromotionResult::unchanged(order.total_amount()));
        }
    }

    #[test]
    fn test_no_applicable_rules_returns_original_total() {
        let engine: PromotionEngine = [Arc::new(HighValueOrderDiscount) as Arc<dyn PromotionRule>]
            .into_iter()
            .collect();
        let result = engine.apply_discounts(
            &order(Money::from_major(50)),
            &profile(CustomerSegment::Regular, 0, 0),
        );
        assert_eq!(result.discounted_total(), Money::from_major(50));
        assert!(result.applied_promotions().is_empty());
    }

    #[test]
    fn test_discounts_are_additive_on_original_total() {
        let engine = PromotionEngine::with_default_rules();
        let order = order(Money::from_major(1000));
        let customer = profile(CustomerSegment::Vip, 0, 10_000);

        let result = engine.apply_discounts(&order, &customer);

        assert_eq!(
            result.applied_promotions(),
            [
                "High Value Order Discount".to_string(),
                "Loyalty Discount".to_string(),
                "VIP Discount".to_string(),
            ]
        );
        assert_eq!(result.original_total(), Money::from_major(1000));
        assert_eq!(result.discounted_total(), Money::from_major(700));
        assert_eq!(result.total_discount(), Money::from_major(300));
    }

    #[test]
    fn test_new_customer_high_value_first_order() {
        let engine = PromotionEngine::with_default_rules();
        let result = engine.apply_discounts(
            &order(Money::from_major(600)),
            &profile(CustomerSegment::New, 0, 0),
        );

        assert_eq!(
            result.applied_promotions(),
            [
                "First Order Discount".to_string(),
                "High Value Order Discount".to_string(),
            ]
        );
        // 600 - (60 + 30)
        assert_eq!(result.discounted_total(), Money::from_major(510));
    }

    #[test]
    fn test_discounted_total_floors_at_zero() {
        let engine: PromotionEngine = [flat("Big", 80), flat("Bigger", 90)].into_iter().collect();
        let result = engine.apply_discounts(
            &order(Money::from_major(100)),
            &profile(CustomerSegment::Regular, 0, 0),
        );

        assert_eq!(result.discounted_total(), Money::zero());
        assert_eq!(result.original_total(), Money::from_major(100));
        assert_eq!(result.applied_promotions().len(), 2);
    }

    #[test]
    fn test_non_positive_discounts_are_not_recorded() {
        let engine: PromotionEngine = [flat("Zero", 0), flat("Negative", -5), flat("Real", 10)]
            .into_iter()
            .collect();
        let result = engine.apply_discounts(
            &order(Money::from_major(100)),
            &profile(CustomerSegment::Regular, 0, 0),
        );

        assert_eq!(result.applied_promotions(), ["Real".to_string()]);
        assert_eq!(result.discounted_total(), Money::from_major(90));
    }

    #[test]
    fn test_zero_total_order_gets_no_promotions() {
        let engine = PromotionEngine::with_default_rules();
        let result = engine.apply_discounts(
            &order(Money::zero()),
            &profile(CustomerSegment::New, 0, 0),
        );

        assert_eq!(result.original_total(), Money::zero());
        assert_eq!(result.discounted_total(), Money::zero());
        assert!(result.applied_promotions().is_empty());
    }

    #[test]
    fn test_duplicate_rule_names_are_kept() {
        let engine: PromotionEngine = [flat("Same", 1), flat("Same", 2)].into_iter().collect();
        let result = engine.apply_discounts(
            &order(Money::from_major(100)),
            &profile(CustomerSegment::Regular, 0, 0),
        );

        assert_eq!(
            result.applied_promotions(),
            ["Same".to_string(), "Same".to_string()]
        );
        assert_eq!(result.discounted_total(), Money::from_major(97));
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PromotionEngine>();
    }
}

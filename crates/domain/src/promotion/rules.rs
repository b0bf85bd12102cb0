//! The shipped promotion rules.

use rust_decimal::Decimal;

use crate::order::{CustomerProfile, CustomerSegment, Money, Order};

use super::PromotionRule;

/// 10% off a new customer's first order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOrderDiscount;

impl FirstOrderDiscount {
    pub const NAME: &'static str = "First Order Discount";
    const RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
}

impl PromotionRule for FirstOrderDiscount {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_match(&self, _order: &Order, profile: &CustomerProfile) -> bool {
        profile.segment() == CustomerSegment::New && profile.past_order_count() == 0
    }

    fn calculate_discount(&self, order: &Order) -> Money {
        order.total_amount().percent(Self::RATE)
    }
}

/// 5% off orders above 500.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighValueOrderDiscount;

impl HighValueOrderDiscount {
    pub const NAME: &'static str = "High Value Order Discount";
    const RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
    const THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);
}

impl PromotionRule for HighValueOrderDiscount {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_match(&self, order: &Order, _profile: &CustomerProfile) -> bool {
        order.total_amount().amount() > Self::THRESHOLD
    }

    fn calculate_discount(&self, order: &Order) -> Money {
        order.total_amount().percent(Self::RATE)
    }
}

/// 10% off for customers whose lifetime order value exceeds 5.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoyaltyDiscount;

impl LoyaltyDiscount {
    pub const NAME: &'static str = "Loyalty Discount";
    const RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
    const THRESHOLD: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
}

impl PromotionRule for LoyaltyDiscount {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_match(&self, _order: &Order, profile: &CustomerProfile) -> bool {
        profile.total_order_value().amount() > Self::THRESHOLD
    }

    fn calculate_discount(&self, order: &Order) -> Money {
        order.total_amount().percent(Self::RATE)
    }
}

/// 15% off for VIP customers.
#[derive(Debug, Clone, Copy, Default)]
pub struct VipDiscount;

impl VipDiscount {
    pub const NAME: &'static str = "VIP Discount";
    const RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);
}

impl PromotionRule for VipDiscount {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_match(&self, _order: &Order, profile: &CustomerProfile) -> bool {
        profile.segment() == CustomerSegment::Vip
    }

    fn calculate_discount(&self, order: &Order) -> Money {
        order.total_amount().percent(Self::RATE)
    }
}

//! Promotion rule trait.

use crate::order::{CustomerProfile, Money, Order};

/// A predicate plus discount calculation, evaluated independently of other rules.
///
/// Rules are stateless and side-effect free, so one instance may be shared
/// by every engine and thread.
pub trait PromotionRule: Send + Sync {
    /// Display name, recorded on the order when the rule applies.
    fn name(&self) -> &str;

    /// Returns true if the rule applies to this order and customer.
    fn is_match(&self, order: &Order, profile: &CustomerProfile) -> bool;

    /// Returns the discount for `order`, computed on its original total.
    fn calculate_discount(&self, order: &Order) -> Money;
}

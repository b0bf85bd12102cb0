//! Promotion evaluation result.

use serde::{Deserialize, Serialize};

use crate::order::Money;

/// Snapshot of one engine run over an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionResult {
    original_total: Money,
    discounted_total: Money,
    /// Rule names in evaluation order. Not deduplicated.
    applied_promotions: Vec<String>,
}

impl PromotionResult {
    pub fn new(
        original_total: Money,
        discounted_total: Money,
        applied_promotions: Vec<String>,
    ) -> Self {
        Self {
            original_total,
            discounted_total,
            applied_promotions,
        }
    }

    /// A result that leaves the total untouched.
    pub fn unchanged(total: Money) -> Self {
        Self::new(total, total, Vec::new())
    }

    pub fn original_total(&self) -> Money {
        self.original_total
    }

    pub fn discounted_total(&self) -> Money {
        self.discounted_total
    }

    pub fn applied_promotions(&self) -> &[String] {
        &self.applied_promotions
    }

    /// Total discount granted.
    pub fn total_discount(&self) -> Money {
        self.original_total - self.discounted_total
    }

    /// Consumes the result, returning the applied rule names.
    pub fn into_applied_promotions(self) -> Vec<String> {
        self.applied_promotions
    }
}

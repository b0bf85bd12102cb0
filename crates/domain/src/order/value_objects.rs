//! Value objects for the order domain.

use common::CustomerId;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// Money amount backed by an exact decimal.
///
/// Percentages and sums are computed without binary floating point, so
/// 10% of 1000.00 is exactly 100.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money amount from a decimal value.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a Money amount from cents (e.g., 1234 = 12.34).
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Creates a Money amount from a whole currency value.
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount as a float, for reporting only.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns `rate` times this amount, e.g. `percent(Decimal::new(10, 2))` for 10%.
    pub fn percent(&self, rate: Decimal) -> Money {
        Self(self.0 * rate)
    }

    /// Returns the larger of this amount and zero.
    pub fn floor_at_zero(self) -> Money {
        if self.is_negative() { Self::zero() } else { self }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounded = self.0.round_dp(2);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            write!(f, "-${:.2}", rounded.abs())
        } else {
            write!(f, "${:.2}", rounded.abs())
        }
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Coarse classification of a customer, driving promotion eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerSegment {
    /// Recently joined, little or no purchase history.
    New,
    /// Established purchase history.
    Regular,
    /// High-value customer.
    #[serde(rename = "VIP")]
    Vip,
}

impl CustomerSegment {
    /// Returns the segment name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerSegment::New => "New",
            CustomerSegment::Regular => "Regular",
            CustomerSegment::Vip => "VIP",
        }
    }
}

impl std::fmt::Display for CustomerSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer's purchase profile.
///
/// Immutable once built; updates produce a replacement value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomerProfile {
    customer_id: CustomerId,
    segment: CustomerSegment,
    past_order_count: u32,
    total_order_value: Money,
}

impl CustomerProfile {
    /// Creates a new profile.
    ///
    /// Fails if `total_order_value` is negative.
    pub fn new(
        customer_id: CustomerId,
        segment: CustomerSegment,
        past_order_count: u32,
        total_order_value: Money,
    ) -> Result<Self, OrderError> {
        if total_order_value.is_negative() {
            return Err(OrderError::NegativeAmount {
                field: "total_order_value",
                amount: total_order_value,
            });
        }

        Ok(Self {
            customer_id,
            segment,
            past_order_count,
            total_order_value,
        })
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn segment(&self) -> CustomerSegment {
        self.segment
    }

    pub fn past_order_count(&self) -> u32 {
        self.past_order_count
    }

    pub fn total_order_value(&self) -> Money {
        self.total_order_value
    }

    /// Returns a copy of this profile with a different past order count.
    pub fn with_past_order_count(self, past_order_count: u32) -> Self {
        Self {
            past_order_count,
            ..self
        }
    }
}

//! Business rules core for order management.
//!
//! This crate provides:
//! - [`OrderStatus`] and the fixed [`StatusTransitionMatrix`]
//! - The [`Order`] entity with guarded status changes and discount application
//! - [`PromotionRule`] implementations and the additive [`PromotionEngine`]
//!
//! Everything here is synchronous and free of I/O.

pub mod error;
pub mod order;
pub mod promotion;

pub use error::OrderError;
pub use order::{
    CustomerProfile, CustomerSegment, Money, Order, OrderStatus, StatusTransitionMatrix,
    TransitionPolicy, UnknownStatus,
};
pub use promotion::{
    FirstOrderDiscount, HighValueOrderDiscount, LoyaltyDiscount, PromotionEngine, PromotionResult,
    PromotionRule, VipDiscount,
};

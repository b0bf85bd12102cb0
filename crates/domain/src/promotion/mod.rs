//! Promotion rules and the engine that combines them.

mod engine;
mod result;
mod rule;
mod rules;

pub use engine::PromotionEngine;
pub use result::PromotionResult;
pub use rule::PromotionRule;
pub use rules::{FirstOrderDiscount, HighValueOrderDiscount, LoyaltyDiscount, VipDiscount};

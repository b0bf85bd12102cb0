//! Orchestration services for the order business core.
//!
//! - [`OrderStatusService`] looks up an order, validates a status change
//!   against the transition matrix, and persists it
//! - [`PromotionService`] evaluates promotions and applies them to stored orders
//! - [`OrderQueryService`] lists orders with the promotions they could receive
//!
//! None of these serialize concurrent updates to the same order; that is
//! the order store's responsibility.

pub mod error;
pub mod promotions;
pub mod query;
pub mod status;

pub use error::{Result, ServiceError};
pub use promotions::{DiscountOutcome, PromotionService};
pub use query::{OrderQueryService, OrderView};
pub use status::{AdvanceOutcome, OrderStatusService};

//! Shared identifier types for the order management workspace.

pub mod ids;

pub use ids::{CustomerId, OrderId};

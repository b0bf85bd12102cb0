//! Order entity, lifecycle status, and related value objects.

mod entity;
mod status;
mod transitions;
mod value_objects;

pub use entity::Order;
pub use status::{OrderStatus, UnknownStatus};
pub use transitions::{StatusTransitionMatrix, TransitionPolicy};
pub use value_objects::{CustomerProfile, CustomerSegment, Money};

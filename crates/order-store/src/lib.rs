//! Order store and customer profile lookup.
//!
//! The traits describe the storage the business core consumes; the
//! in-memory implementations back tests and the demo server.

pub mod error;
pub mod memory;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::{InMemoryOrderStore, InMemoryProfileStore};
pub use store::{OrderStore, OrderStoreExt, ProfileLookup};

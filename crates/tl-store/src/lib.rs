//! tl-store
//!
//! Typed CRUD facade over the external document store's REST API.
//! No business logic lives here; authorization happens in the caller.

pub(crate) mod error;
pub(crate) mod store;

pub use error::{Result, StoreError};
pub use store::DocumentStore;

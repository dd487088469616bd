//! tl-identity
//!
//! Wraps the external identity provider: login, registration, session
//! restoration, logout. Produces the `(identity, token)` pair consumed by
//! the session layer, and persists it in a local snapshot file.

pub(crate) mod error;
pub(crate) mod provider;
pub(crate) mod service;
pub(crate) mod snapshot;

pub use error::{AuthError, Result};
pub use provider::ProviderClient;
pub use service::{AuthenticatedUser, IdentityService};
pub use snapshot::{SessionSnapshot, SnapshotStore};

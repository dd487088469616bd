use serde::{Deserialize, Serialize};

/// Authenticated principal for the current session.
///
/// `role` is a legacy global role hint written at registration. It is
/// superseded per-list by membership and never consulted by the resolver;
/// it is carried only as opaque profile metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable, provider-issued user id
    pub uid: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

use serde::{Deserialize, Serialize};

/// Companion profile record in the `users` collection, keyed by uid.
/// Written at registration; required to exist at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

use crate::Role;

use serde::{Deserialize, Serialize};

/// Membership entry embedded in a task list.
/// At most one entry per email; the duplicate check is read-then-write,
/// not atomic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub email: String,
    pub role: Role,
}

impl Participant {
    pub fn new(email: &str, role: Role) -> Self {
        Self {
            email: email.to_string(),
            role,
        }
    }
}

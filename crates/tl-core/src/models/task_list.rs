//! Task list entity - the unit of sharing and authorization.

use crate::{Participant, Role};

use serde::{Deserialize, Serialize};

/// A task list owns its embedded participant sequence and, by foreign key,
/// its child tasks. The owner email is immutable after creation and always
/// resolves to Admin regardless of the participant entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    /// Store-assigned document id
    pub id: String,
    pub name: String,
    /// Creator's email
    pub owner: String,
    pub participants: Vec<Participant>,
}

impl TaskList {
    /// Create a new list as it is persisted: the owner is the first
    /// participant, with role Admin.
    pub fn new(id: String, name: String, owner: String) -> Self {
        let owner_entry = Participant::new(&owner, Role::Admin);
        Self {
            id,
            name,
            owner,
            participants: vec![owner_entry],
        }
    }

    /// Display name; a record with an empty name shows as "Unnamed List".
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed List"
        } else {
            &self.name
        }
    }
}

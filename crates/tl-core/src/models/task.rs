use serde::{Deserialize, Serialize};

/// A task belongs to exactly one task list; it has no independent existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned document id
    pub id: String,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

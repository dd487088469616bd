mod property_tests;
mod validate;

use crate::{Participant, Role, TaskList};

/// Build a list owned by `owner` with the given participant entries.
/// The owner entry is NOT added implicitly so tests can model stale or
/// conflicting membership records.
pub(crate) fn list_with(owner: &str, participants: &[(&str, Role)]) -> TaskList {
    TaskList {
        id: "list-1".to_string(),
        name: "Groceries".to_string(),
        owner: owner.to_string(),
        participants: participants
            .iter()
            .map(|(email, role)| Participant::new(email, *role))
            .collect(),
    }
}

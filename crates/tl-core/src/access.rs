//! Access control and membership resolution.
//!
//! A caller's role is derived from the list record at read time, never
//! stored redundantly, so every gate check runs against a freshly loaded
//! list. Ownership always wins; an unlisted caller falls back to Viewer
//! (fail-closed).

use crate::{CoreError, Participant, Result as CoreErrorResult, Role, TaskList};
use crate::validate::validate_email;

use std::panic::Location;

use error_location::ErrorLocation;

/// Derive the caller's effective role for a list.
///
/// 1. Owner resolves to Admin unconditionally, even against a conflicting
///    Viewer participant entry.
/// 2. Otherwise the first participant entry with a matching email wins.
/// 3. Otherwise Viewer.
///
/// Email comparison is case-sensitive exact match throughout.
pub fn resolve_role(list: &TaskList, caller_email: &str) -> Role {
    if caller_email == list.owner {
        return Role::Admin;
    }

    list.participants
        .iter()
        .find(|p| p.email == caller_email)
        .map(|p| p.role)
        .unwrap_or(Role::Viewer)
}

/// True iff the caller is a listed non-owner participant.
/// Display only ("Shared" badge), never authorization.
pub fn is_shared(list: &TaskList, caller_email: &str) -> bool {
    caller_email != list.owner && list.participants.iter().any(|p| p.email == caller_email)
}

/// The authorization gate for every mutating operation except
/// completion-toggle (any role may toggle, an explicit product decision).
#[track_caller]
pub fn ensure_admin(list: &TaskList, caller_email: &str) -> CoreErrorResult<()> {
    match resolve_role(list, caller_email) {
        Role::Admin => Ok(()),
        resolved => Err(CoreError::Forbidden {
            resolved,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Validate a participant addition against the current list record.
///
/// Rejects a malformed email and an email already present (case-sensitive
/// exact match). The caller must separately pass `ensure_admin`; this
/// function only yields the entry to append.
#[track_caller]
pub fn validate_new_participant(
    list: &TaskList,
    email: &str,
    role: Role,
) -> CoreErrorResult<Participant> {
    validate_email(email)?;

    if list.participants.iter().any(|p| p.email == email) {
        return Err(CoreError::Validation {
            message: format!("'{email}' is already a participant"),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Participant::new(email, role))
}

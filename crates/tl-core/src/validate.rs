//! Input validation shared by registration, list and task forms.

use crate::{CoreError, Result as CoreErrorResult};

/// Basic `local@domain.tld` shape check: one '@' splitting two non-empty
/// halves, a dot with non-empty sides in the domain, no whitespace.
#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    let shape_ok = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !email.chars().any(char::is_whitespace)
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };

    if shape_ok {
        Ok(())
    } else {
        Err(CoreError::validation(
            "Please enter a valid email address",
            Some("email"),
        ))
    }
}

/// A list name must be non-empty after trimming.
#[track_caller]
pub fn validate_list_name(name: &str) -> CoreErrorResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::validation(
            "Task list name cannot be empty",
            Some("name"),
        ));
    }
    Ok(())
}

/// Task name and description are both required, on create and on edit.
#[track_caller]
pub fn validate_task_fields(name: &str, description: &str) -> CoreErrorResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::validation(
            "Task name cannot be empty",
            Some("name"),
        ));
    }
    if description.trim().is_empty() {
        return Err(CoreError::validation(
            "Task description cannot be empty",
            Some("description"),
        ));
    }
    Ok(())
}

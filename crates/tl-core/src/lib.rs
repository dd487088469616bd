pub mod access;
pub mod error;
pub mod models;
pub mod validate;

#[cfg(test)]
mod tests;

pub use access::{ensure_admin, is_shared, resolve_role, validate_new_participant};
pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::participant::Participant;
pub use models::role::Role;
pub use models::task::Task;
pub use models::task_list::TaskList;
pub use models::user_profile::UserProfile;
pub use validate::{validate_email, validate_list_name, validate_task_fields};

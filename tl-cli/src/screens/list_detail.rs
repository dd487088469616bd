//! List detail screen: one list's tasks and participants.

use crate::Result as AppResult;
use crate::screens::ScreenContext;

use tl_core::{
    Participant, Role, Task, ensure_admin, is_shared, resolve_role, validate_new_participant,
    validate_task_fields,
};

use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListDetailView {
    pub id: String,
    pub name: String,
    /// Caller's derived role for this list
    pub role: Role,
    pub shared: bool,
    pub participants: Vec<Participant>,
    pub tasks: Vec<Task>,
}

/// Fetch the list and its tasks, deriving the caller's role
pub async fn load(ctx: &ScreenContext, list_id: &str) -> AppResult<ListDetailView> {
    let caller = ctx.session.email();
    let list = ctx.store.get_list(list_id).await?;
    let tasks = ctx.store.tasks_for_list(list_id).await?;

    Ok(ListDetailView {
        id: list.id.clone(),
        name: list.display_name().to_string(),
        role: resolve_role(&list, caller),
        shared: is_shared(&list, caller),
        participants: list.participants,
        tasks,
    })
}

/// Create a task. Admin only; new tasks start incomplete.
pub async fn add_task(
    ctx: &ScreenContext,
    list_id: &str,
    name: &str,
    description: &str,
) -> AppResult<ListDetailView> {
    let list = ctx.store.get_list(list_id).await?;
    ensure_admin(&list, ctx.session.email())?;
    validate_task_fields(name, description)?;

    let task_id = ctx.store.create_task(list_id, name, description).await?;
    info!("Created task {task_id} in list {list_id}");

    load(ctx, list_id).await
}

/// Edit a task's name and description. Admin only.
pub async fn edit_task(
    ctx: &ScreenContext,
    list_id: &str,
    task_id: &str,
    name: &str,
    description: &str,
) -> AppResult<ListDetailView> {
    let list = ctx.store.get_list(list_id).await?;
    ensure_admin(&list, ctx.session.email())?;
    validate_task_fields(name, description)?;

    ctx.store
        .update_task(list_id, task_id, name, description)
        .await?;

    load(ctx, list_id).await
}

/// Delete a task. Admin only.
pub async fn remove_task(
    ctx: &ScreenContext,
    list_id: &str,
    task_id: &str,
) -> AppResult<ListDetailView> {
    let list = ctx.store.get_list(list_id).await?;
    ensure_admin(&list, ctx.session.email())?;

    ctx.store.delete_task(list_id, task_id).await?;

    load(ctx, list_id).await
}

/// Toggle a task's completion flag.
///
/// Deliberately NOT gated: any role, including Viewer, may toggle. This is
/// an explicit product decision, not an oversight. The current flag is read
/// from a fresh task fetch and the negation written back.
pub async fn toggle_task(
    ctx: &ScreenContext,
    list_id: &str,
    task_id: &str,
) -> AppResult<ListDetailView> {
    let task = ctx.store.get_task(list_id, task_id).await?;

    ctx.store
        .set_task_completed(list_id, task_id, !task.completed)
        .await?;

    load(ctx, list_id).await
}

/// Add a participant. Admin only; duplicates and malformed emails are
/// rejected before any write. Persists the full updated sequence
/// (replace-whole-array semantics).
pub async fn add_participant(
    ctx: &ScreenContext,
    list_id: &str,
    email: &str,
    role: Role,
) -> AppResult<ListDetailView> {
    let list = ctx.store.get_list(list_id).await?;
    ensure_admin(&list, ctx.session.email())?;

    let entry = validate_new_participant(&list, email, role)?;

    let mut participants = list.participants;
    participants.push(entry);
    ctx.store
        .replace_participants(list_id, &participants)
        .await?;
    info!("Added participant {email} to list {list_id}");

    load(ctx, list_id).await
}

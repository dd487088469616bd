//! Home screen: the caller's task lists with role and shared badge.

use crate::Result as AppResult;
use crate::screens::ScreenContext;

use tl_core::{Role, ensure_admin, is_shared, resolve_role, validate_list_name};

use log::info;
use serde::Serialize;

/// One row on the home screen
#[derive(Debug, Serialize)]
pub struct ListSummary {
    pub id: String,
    pub name: String,
    pub owner: String,
    /// Caller's derived role for this list
    pub role: Role,
    /// "Shared" badge: listed non-owner participant. Display only.
    pub shared: bool,
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub lists: Vec<ListSummary>,
}

/// Fetch the caller's lists and derive a role per list
pub async fn load(ctx: &ScreenContext) -> AppResult<HomeView> {
    let caller = ctx.session.email();
    let lists = ctx.store.lists_for_user(caller).await?;

    let lists = lists
        .into_iter()
        .map(|list| ListSummary {
            role: resolve_role(&list, caller),
            shared: is_shared(&list, caller),
            id: list.id,
            name: list.name,
            owner: list.owner,
        })
        .collect();

    Ok(HomeView { lists })
}

/// Create a list; the caller becomes owner and sole Admin participant
pub async fn create_list(ctx: &ScreenContext, name: &str) -> AppResult<HomeView> {
    validate_list_name(name)?;

    let id = ctx
        .store
        .create_list(name, &ctx.session.identity.uid, ctx.session.email())
        .await?;
    info!("Created task list {id}");

    load(ctx).await
}

/// Rename a list. Admin only.
pub async fn rename_list(ctx: &ScreenContext, id: &str, name: &str) -> AppResult<HomeView> {
    let list = ctx.store.get_list(id).await?;
    ensure_admin(&list, ctx.session.email())?;
    validate_list_name(name)?;

    ctx.store.rename_list(id, name).await?;

    load(ctx).await
}

/// Delete a list. Admin only. Child tasks are not cascade-deleted.
pub async fn delete_list(ctx: &ScreenContext, id: &str) -> AppResult<HomeView> {
    let list = ctx.store.get_list(id).await?;
    ensure_admin(&list, ctx.session.email())?;

    ctx.store.delete_list(id).await?;
    info!("Deleted task list {id}");

    load(ctx).await
}

//! Screen orchestration: fetch, derive role, authorize, mutate, refetch.
//!
//! Every gated action loads the list record to completion before the gate
//! check runs; no cached role is ever consulted for authorization. After
//! every successful write the screen refetches instead of mutating the
//! displayed state optimistically.

pub mod home;
pub mod list_detail;

use crate::session::SessionState;

use tl_store::DocumentStore;

/// Everything a screen function needs for one invocation
pub struct ScreenContext {
    pub store: DocumentStore,
    pub session: SessionState,
}

impl ScreenContext {
    pub fn new(store: DocumentStore, session: SessionState) -> Self {
        Self { store, session }
    }
}

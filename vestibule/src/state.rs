use crate::store::{MessageStore, TaskStore};
use axum::extract::FromRef;
use tessera::CsrfManager;

/// Application state
///
/// Called it "Zustand" to avoid a name collision with `axum::extract::State`.
/// "Zustand" is just the german word for state.
#[derive(Clone, FromRef)]
pub struct Zustand {
    pub csrf: CsrfManager,
    pub messages: MessageStore,
    pub tasks: TaskStore,
}

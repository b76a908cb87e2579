use crate::{http::page, store::TaskStore, Application};
use axum::{extract::State, response::Html};
use satchel::SessionHandle;
use tessera::CsrfManager;
use vestibule_error::Result;
use vestibule_routing::RequestContext;

#[instrument(skip_all)]
pub async fn get(
    State(csrf): State<CsrfManager>,
    State(tasks): State<TaskStore>,
    request: RequestContext,
    session: SessionHandle,
) -> Result<Html<String>> {
    let tasks = tasks.list().await;
    // Delete buttons are forms too
    let csrf_token = csrf.current_token(&mut *session.lock());

    page::render(
        Application::TaskManager,
        "tasks/index.html",
        &request,
        &session,
        minijinja::context! {
            csrf_token => csrf_token.as_str(),
            tasks,
        },
    )
}

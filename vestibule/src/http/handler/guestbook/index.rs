use crate::{http::page, Application};
use axum::response::Html;
use satchel::SessionHandle;
use vestibule_error::Result;
use vestibule_routing::RequestContext;

#[instrument(skip_all)]
pub async fn get(request: RequestContext, session: SessionHandle) -> Result<Html<String>> {
    page::render(
        Application::Guestbook,
        "guestbook/index.html",
        &request,
        &session,
        minijinja::context! {},
    )
}

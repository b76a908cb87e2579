use crate::{http::page, store::MessageStore, Application};
use axum::{extract::State, response::Html};
use satchel::SessionHandle;
use vestibule_error::Result;
use vestibule_routing::RequestContext;

#[instrument(skip_all)]
pub async fn get(
    State(messages): State<MessageStore>,
    request: RequestContext,
    session: SessionHandle,
) -> Result<Html<String>> {
    let messages = messages.list().await;

    page::render(
        Application::Guestbook,
        "guestbook/guestbook.html",
        &request,
        &session,
        minijinja::context! { messages },
    )
}

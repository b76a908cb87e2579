use crate::{
    http::{
        extractor::FormData,
        page::{self, RESUBMIT_FORM},
    },
    store::{NewTask, TaskStore},
    Application,
};
use axum::{
    extract::State,
    response::{Html, Redirect},
};
use satchel::{Level, SessionHandle};
use serde::Deserialize;
use tessera::CsrfManager;
use vestibule_error::Result;
use vestibule_routing::RequestContext;

#[derive(Deserialize)]
pub struct AddForm {
    #[serde(default, rename = "csrfToken")]
    csrf_token: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

#[instrument(skip_all)]
pub async fn get(
    State(csrf): State<CsrfManager>,
    request: RequestContext,
    session: SessionHandle,
) -> Result<Html<String>> {
    let csrf_token = csrf.current_token(&mut *session.lock());

    page::render(
        Application::TaskManager,
        "tasks/add.html",
        &request,
        &session,
        minijinja::context! {
            csrf_token => csrf_token.as_str(),
        },
    )
}

#[instrument(skip_all)]
pub async fn post(
    State(csrf): State<CsrfManager>,
    State(tasks): State<TaskStore>,
    request: RequestContext,
    session: SessionHandle,
    FormData(form): FormData<AddForm>,
) -> Result<Redirect> {
    let csrf_valid = csrf.validate(&mut *session.lock(), form.csrf_token.as_deref());
    if !csrf_valid {
        return Ok(page::redirect_with_flash(
            &request,
            &session,
            "add",
            Level::Error,
            RESUBMIT_FORM,
        ));
    }

    page::require_fields(&[&form.title, &form.description])?;

    tasks
        .insert(
            NewTask::builder()
                .title(form.title.trim())
                .description(form.description)
                .build(),
        )
        .await;

    Ok(page::redirect_with_flash(
        &request,
        &session,
        "index",
        Level::Success,
        "Task added",
    ))
}

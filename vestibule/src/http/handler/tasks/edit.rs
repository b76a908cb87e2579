use super::parse_id;
use crate::{
    http::{
        extractor::FormData,
        page::{self, RESUBMIT_FORM},
    },
    store::{TaskStore, TaskUpdate},
    Application,
};
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
};
use satchel::{Level, SessionHandle};
use serde::Deserialize;
use tessera::CsrfManager;
use vestibule_error::{bail, ErrorType, Result};
use vestibule_routing::RequestContext;

#[derive(Deserialize)]
pub struct EditQuery {
    #[serde(default)]
    id: String,
}

#[derive(Deserialize)]
pub struct EditForm {
    #[serde(default, rename = "csrfToken")]
    csrf_token: Option<String>,
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    /// Checkboxes are only submitted when ticked
    #[serde(default)]
    done: Option<String>,
}

#[instrument(skip_all)]
pub async fn get(
    State(csrf): State<CsrfManager>,
    State(tasks): State<TaskStore>,
    Query(query): Query<EditQuery>,
    request: RequestContext,
    session: SessionHandle,
) -> Result<Html<String>> {
    let id = parse_id(&query.id)?;
    let Some(task) = tasks.get(id).await else {
        bail!(type = ErrorType::NotFound, "task not found");
    };

    let csrf_token = csrf.current_token(&mut *session.lock());

    page::render(
        Application::TaskManager,
        "tasks/edit.html",
        &request,
        &session,
        minijinja::context! {
            csrf_token => csrf_token.as_str(),
            task,
        },
    )
}

#[instrument(skip_all)]
pub async fn post(
    State(csrf): State<CsrfManager>,
    State(tasks): State<TaskStore>,
    request: RequestContext,
    session: SessionHandle,
    FormData(form): FormData<EditForm>,
) -> Result<Redirect> {
    let csrf_valid = csrf.validate(&mut *session.lock(), form.csrf_token.as_deref());
    if !csrf_valid {
        session.push_flash(Level::Error, RESUBMIT_FORM);
        let location = parse_id(&form.id).map_or_else(
            |_| request.url_for("index"),
            |id| format!("{}?id={id}", request.url_for("edit")),
        );
        return Ok(Redirect::to(&location));
    }

    let id = parse_id(&form.id)?;
    page::require_fields(&[&form.title, &form.description])?;

    let update = TaskUpdate::builder()
        .title(form.title.trim())
        .description(form.description)
        .done(form.done.is_some())
        .build();

    if tasks.update(id, update).await.is_none() {
        bail!(type = ErrorType::NotFound, "task not found");
    }

    Ok(page::redirect_with_flash(
        &request,
        &session,
        "index",
        Level::Success,
        "Task updated",
    ))
}

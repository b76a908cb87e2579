use super::parse_id;
use crate::{
    http::{
        extractor::FormData,
        page::{self, RESUBMIT_FORM},
    },
    store::TaskStore,
};
use axum::{extract::State, response::Redirect};
use satchel::{Level, SessionHandle};
use serde::Deserialize;
use tessera::CsrfManager;
use vestibule_error::{bail, ErrorType, Result};
use vestibule_routing::RequestContext;

#[derive(Deserialize)]
pub struct DeleteForm {
    #[serde(default, rename = "csrfToken")]
    csrf_token: Option<String>,
    #[serde(default)]
    id: String,
}

#[instrument(skip_all)]
pub async fn post(
    State(csrf): State<CsrfManager>,
    State(tasks): State<TaskStore>,
    request: RequestContext,
    session: SessionHandle,
    FormData(form): FormData<DeleteForm>,
) -> Result<Redirect> {
    let csrf_valid = csrf.validate(&mut *session.lock(), form.csrf_token.as_deref());
    if !csrf_valid {
        return Ok(page::redirect_with_flash(
            &request,
            &session,
            "index",
            Level::Error,
            RESUBMIT_FORM,
        ));
    }

    let id = parse_id(&form.id)?;
    if !tasks.remove(id).await {
        bail!(type = ErrorType::NotFound, "task not found");
    }

    Ok(page::redirect_with_flash(
        &request,
        &session,
        "index",
        Level::Success,
        "Task deleted",
    ))
}

use crate::{
    http::{
        extractor::FormData,
        page::{self, RESUBMIT_FORM},
    },
    store::{MessageStore, NewMessage},
    Application,
};
use axum::{
    extract::State,
    response::{Html, Redirect},
};
use garde::Validate;
use satchel::{Level, SessionHandle};
use serde::Deserialize;
use tessera::CsrfManager;
use vestibule_error::{vestibule_error, ErrorType, Result};
use vestibule_routing::RequestContext;

const INVALID_EMAIL: &str = "A valid email address is required";

#[derive(Deserialize, Validate)]
pub struct ContactForm {
    #[garde(skip)]
    #[serde(default, rename = "csrfToken")]
    csrf_token: Option<String>,

    #[garde(skip)]
    #[serde(default)]
    name: String,

    #[garde(email)]
    #[serde(default)]
    email: String,

    #[garde(skip)]
    #[serde(default)]
    message: String,
}

#[instrument(skip_all)]
pub async fn get(
    State(csrf): State<CsrfManager>,
    request: RequestContext,
    session: SessionHandle,
) -> Result<Html<String>> {
    let csrf_token = csrf.current_token(&mut *session.lock());

    page::render(
        Application::Guestbook,
        "guestbook/contact.html",
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
    State(messages): State<MessageStore>,
    request: RequestContext,
    session: SessionHandle,
    FormData(form): FormData<ContactForm>,
) -> Result<Redirect> {
    let csrf_valid = csrf.validate(&mut *session.lock(), form.csrf_token.as_deref());
    if !csrf_valid {
        return Ok(page::redirect_with_flash(
            &request,
            &session,
            "contact",
            Level::Error,
            RESUBMIT_FORM,
        ));
    }

    page::require_fields(&[&form.name, &form.email, &form.message])?;
    form.validate()
        .map_err(|report| vestibule_error!(type = ErrorType::bad_request(INVALID_EMAIL), report))?;

    let message = messages
        .insert(
            NewMessage::builder()
                .name(form.name.trim())
                .email(form.email.trim())
                .message(form.message)
                .build(),
        )
        .await;

    Ok(page::redirect_with_flash(
        &request,
        &session,
        "guestbook",
        Level::Success,
        format!(
            "Thank you, {}, for your message. It was stored.",
            message.name
        ),
    ))
}

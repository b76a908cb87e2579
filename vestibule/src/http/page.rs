use crate::{template, Application};
use axum::response::{Html, Redirect};
use satchel::{Level, SessionHandle};
use serde::Serialize;
use std::collections::BTreeMap;
use vestibule_error::{bail, ErrorType, Result};
use vestibule_routing::RequestContext;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Flashed when a form fails the CSRF check
pub const RESUBMIT_FORM: &str = "Sorry, please send the form again.";

/// Render a page of `application`
///
/// Adds what every layout needs: the application name, links to its routes and the pending flash messages.
pub fn render<S>(
    application: Application,
    name: &str,
    request: &RequestContext,
    session: &SessionHandle,
    ctx: S,
) -> Result<Html<String>>
where
    S: Serialize,
{
    let links: BTreeMap<&str, String> = application
        .route_keys()
        .iter()
        .map(|key| (*key, request.url_for(key)))
        .collect();

    template::render(
        name,
        minijinja::context! {
            app_name => application.title(),
            links,
            flashes => session.take_flashes(),
            ..minijinja::Value::from_serialize(ctx)
        },
    )
}

/// Queue a flash message and send the client to another route (303)
pub fn redirect_with_flash<M>(
    request: &RequestContext,
    session: &SessionHandle,
    route_key: &str,
    level: Level,
    message: M,
) -> Redirect
where
    M: Into<String>,
{
    session.push_flash(level, message);
    Redirect::to(&request.url_for(route_key))
}

/// Reject the request unless every field has a non-blank value
pub fn require_fields(fields: &[&str]) -> Result<()> {
    if fields.iter().any(|field| field.trim().is_empty()) {
        bail!(
            type = ErrorType::bad_request(ALL_FIELDS_REQUIRED),
            "required form field missing"
        );
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::require_fields;

    #[test]
    fn blank_fields_are_rejected() {
        assert!(require_fields(&["a", "b"]).is_ok());
        assert!(require_fields(&["a", ""]).is_err());
        assert!(require_fields(&["  ", "b"]).is_err());
    }
}

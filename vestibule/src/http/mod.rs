use crate::{signal::Receiver, state::Zustand, Application};
use axum::{
    body::Body,
    response::{IntoResponse, Response},
    Router,
};
use color_eyre::eyre::{self, Context};
use cookie::Key;
use http::{HeaderName, StatusCode};
use satchel::{SessionLayer, SessionStore};
use std::{any::Any, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use vestibule_config::Configuration;
use vestibule_error::GENERIC_SERVER_ERROR;
use vestibule_routing::Dispatcher;

pub mod extractor;
pub mod handler;
pub mod page;

static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Minimum length of the configured session secret in bytes
const MIN_SECRET_LEN: usize = 32;

#[allow(clippy::needless_pass_by_value)]
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(%details, "handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_SERVER_ERROR).into_response()
}

fn session_key(config: &vestibule_config::session::Configuration) -> eyre::Result<Key> {
    match config.secret {
        Some(ref secret) => {
            if secret.len() < MIN_SECRET_LEN {
                eyre::bail!("session secret has to be at least {MIN_SECRET_LEN} bytes long");
            }

            Ok(Key::derive_from(secret.as_bytes()))
        }
        None => {
            warn!("no session secret configured, sessions won't survive a restart");
            Ok(Key::generate())
        }
    }
}

pub fn create(
    state: Zustand,
    application: Application,
    config: &Configuration,
) -> eyre::Result<Router> {
    let routes = application.routes().with_state(state);
    let dispatcher = Dispatcher::new(routes, &config.server.base_path);

    let session_store = SessionStore::new(
        config.session.max_sessions,
        Duration::from_secs(config.session.idle_timeout_secs),
    );
    let session_layer = SessionLayer::new(session_store, session_key(&config.session)?)
        .secure(config.session.secure_cookie);

    let router = dispatcher
        .into_router()
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(session_layer)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone()))
        .layer(SetRequestIdLayer::new(
            X_REQUEST_ID.clone(),
            MakeRequestUuid,
        ));

    Ok(router)
}

#[instrument(skip_all, fields(application = %application, port = %config.server.port))]
pub async fn run(
    state: Zustand,
    application: Application,
    config: &Configuration,
    shutdown_signal: Receiver,
) -> eyre::Result<()> {
    let router = create(state, application, config)?;
    let listener = TcpListener::bind(("0.0.0.0", config.server.port))
        .await
        .wrap_err("Failed to bind the HTTP listener")?;

    info!(base_path = %config.server.base_path, "serving requests");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal.wait())
        .await?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::{handle_panic, session_key};
    use http::StatusCode;
    use vestibule_config::session::Configuration;

    #[test]
    fn panics_become_generic_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn short_session_secret_is_rejected() {
        let config = Configuration {
            secret: Some("too short".into()),
            ..Configuration::default()
        };
        assert!(session_key(&config).is_err());

        let config = Configuration {
            secret: Some("a secret that is long enough to derive a key from".into()),
            ..Configuration::default()
        };
        assert!(session_key(&config).is_ok());
        assert!(session_key(&Configuration::default()).is_ok());
    }
}

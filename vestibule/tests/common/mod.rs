#![allow(dead_code)]

use axum::{body::Body, Router};
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use vestibule::Application;
use vestibule_config::Configuration;

pub const TOKEN_MARKER: &str = r#"<input type="hidden" name="csrfToken" value=""#;

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub request_id: Option<String>,
    pub body: String,
}

/// Drives the router like a browser with a cookie jar holding the session cookie
pub struct Client {
    router: Router,
    cookie: Option<String>,
}

impl Client {
    pub fn new(application: Application, base_path: &str) -> Self {
        let config: Configuration = format!(
            r#"
            [server]
            port = 0
            base-path = "{base_path}"

            [session]
            secret = "test secret that is definitely longer than thirty-two bytes"
            "#
        )
        .parse()
        .unwrap();

        let state = vestibule::initialise_state(&config);
        let router = vestibule::http::create(state, application, &config).unwrap();

        Self {
            router,
            cookie: None,
        }
    }

    pub fn forget_session(&mut self) {
        self.cookie = None;
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send("GET", uri, Body::empty(), None).await
    }

    pub async fn post(&mut self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        let body = serde_urlencoded::to_string(form).unwrap();
        self.send(
            "POST",
            uri,
            Body::from(body),
            Some("application/x-www-form-urlencoded"),
        )
        .await
    }

    pub async fn send(
        &mut self,
        method: &str,
        uri: &str,
        body: Body,
        content_type: Option<&str>,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(ref cookie) = self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }

        let header_string = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .map(|value| value.to_str().unwrap().to_string())
        };
        let location = header_string(header::LOCATION);
        let request_id = header_string(header::HeaderName::from_static("x-request-id"));
        let status = response.status();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            location,
            request_id,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

/// Pull the CSRF token out of a rendered form
pub fn extract_token(body: &str) -> String {
    let start = body.find(TOKEN_MARKER).expect("no csrf token in page") + TOKEN_MARKER.len();
    body[start..start + 64].to_string()
}

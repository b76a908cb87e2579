use crate::{normalize, INDEX_ROUTE};
use axum::extract::FromRequestParts;
use http::{request::Parts, uri::PathAndQuery, Method, StatusCode, Uri};
use smol_str::SmolStr;

/// Per-request routing information
///
/// Created by the dispatcher and handed to the handler through the request extensions.
#[derive(Clone, Debug)]
pub struct RequestContext {
    raw_uri: Uri,
    route_key: String,
    method: String,
    base_path: SmolStr,
}

impl RequestContext {
    /// `base_path` is expected to be lower-case already
    #[must_use]
    pub fn new(raw_uri: &Uri, raw_method: &Method, base_path: &str) -> Self {
        let path_and_query = raw_uri
            .path_and_query()
            .map_or(raw_uri.path(), PathAndQuery::as_str);

        Self {
            raw_uri: raw_uri.clone(),
            route_key: normalize(path_and_query, base_path),
            method: raw_method.as_str().to_uppercase(),
            base_path: base_path.into(),
        }
    }

    #[must_use]
    pub fn raw_uri(&self) -> &Uri {
        &self.raw_uri
    }

    #[must_use]
    pub fn route_key(&self) -> &str {
        &self.route_key
    }

    /// Upper-cased request method
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Absolute path of a route under the deployment's base path
    #[must_use]
    pub fn url_for(&self, route_key: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        if route_key == INDEX_ROUTE {
            format!("{base}/")
        } else {
            format!("{base}/{route_key}")
        }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Self>().cloned().ok_or_else(|| {
            error!("handler invoked outside of the dispatcher");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                vestibule_error::GENERIC_SERVER_ERROR,
            )
        })
    }
}

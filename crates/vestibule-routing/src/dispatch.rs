use crate::{resolve_raw, RequestContext, RouteTable, RoutingError};
use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
    routing::MethodRouter,
    Router,
};
use http::{Method, Uri};
use smol_str::SmolStr;
use tower::ServiceExt;
use triomphe::Arc;

struct DispatcherInner {
    routes: RouteTable,
    base_path: SmolStr,
}

/// Front controller
///
/// Every request, whatever its path, passes through [`Dispatcher::dispatch`].
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

impl Dispatcher {
    /// `base_path` is matched case-insensitively, a trailing slash is ignored
    #[must_use]
    pub fn new(routes: RouteTable, base_path: &str) -> Self {
        Self {
            inner: Arc::new(DispatcherInner {
                routes,
                base_path: base_path.trim_end_matches('/').to_lowercase().into(),
            }),
        }
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.inner.base_path
    }

    /// Find the handler for a request without invoking it
    pub fn locate(
        &self,
        uri: &Uri,
        method: &Method,
    ) -> Result<(RequestContext, MethodRouter), RoutingError> {
        let context = RequestContext::new(uri, method, &self.inner.base_path);
        debug!(
            uri = %context.raw_uri(),
            route_key = context.route_key(),
            "normalized request path"
        );

        let locator = resolve_raw(context.route_key(), context.method())?;
        debug!(method = context.method(), "method allowed");

        let Some(route) = self.inner.routes.lookup(&locator) else {
            return Err(RoutingError::NotFound(locator));
        };
        debug!(%locator, "handler located");

        Ok((context, route.clone()))
    }

    #[instrument(skip_all, fields(method = %request.method(), uri = %request.uri()))]
    pub async fn dispatch(&self, mut request: Request) -> Response {
        let (context, route) = match self.locate(request.uri(), request.method()) {
            Ok(found) => found,
            Err(error) => return error.into_response(),
        };
        request.extensions_mut().insert(context);

        match route.oneshot(request).await {
            Ok(response) => {
                debug!(status = %response.status(), "handler invoked");
                response
            }
            Err(never) => match never {},
        }
    }

    /// Router that sends every request to this dispatcher
    pub fn into_router(self) -> Router {
        Router::new().fallback(dispatch).with_state(self)
    }
}

/// Fallback handler wrapping [`Dispatcher::dispatch`]
pub async fn dispatch(State(dispatcher): State<Dispatcher>, request: Request) -> Response {
    dispatcher.dispatch(request).await
}

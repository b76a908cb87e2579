use crate::{
    ResponseFuture, Session, SessionHandle, SessionId, SessionStore, SESSION_COOKIE_NAME,
};
use cookie::{Cookie, CookieJar, Key};
use http::{header, Request, Response};
use std::task::{self, Poll};
use tower::Service;

#[derive(Clone)]
pub struct SessionService<S> {
    inner: S,
    store: SessionStore,
    key: Key,
    secure: bool,
}

impl<S> SessionService<S> {
    pub fn new(inner: S, store: SessionStore, key: Key, secure: bool) -> Self {
        Self {
            inner,
            store,
            key,
            secure,
        }
    }

    fn read_session_id<B>(&self, req: &Request<B>) -> Option<SessionId> {
        let mut jar = CookieJar::new();
        for header in req.headers().get_all(header::COOKIE) {
            let Ok(cookie_str) = header.to_str() else {
                continue;
            };

            for cookie in Cookie::split_parse_encoded(cookie_str.to_string()) {
                match cookie {
                    Ok(cookie) => jar.add_original(cookie),
                    Err(error) => debug!(?error, "failed to decode cookie"),
                }
            }
        }

        jar.signed(&self.key)
            .get(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().into())
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for SessionService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
{
    type Error = S::Error;
    type Future = ResponseFuture<S::Future>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let existing = self
            .read_session_id(&req)
            .and_then(|id| self.store.load(&id));

        let is_new = existing.is_none();
        let session = existing.unwrap_or_else(|| {
            let session = Session::new();
            debug!(session_id = %session.id(), "starting new session");
            session
        });

        let handle = SessionHandle::new(session);
        req.extensions_mut().insert(handle.clone());

        ResponseFuture {
            inner: self.inner.call(req),
            handle,
            store: self.store.clone(),
            key: self.key.clone(),
            set_cookie: is_new,
            secure: self.secure,
        }
    }
}

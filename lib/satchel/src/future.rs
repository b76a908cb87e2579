use crate::{SessionHandle, SessionStore, SESSION_COOKIE_NAME};
use cookie::{Cookie, CookieJar, Expiration, Key, SameSite};
use http::{header, HeaderValue, Response};
use pin_project_lite::pin_project;
use std::{
    future::Future,
    pin::Pin,
    task::{self, ready, Poll},
};

pin_project! {
    pub struct ResponseFuture<F> {
        #[pin]
        pub(crate) inner: F,
        pub(crate) handle: SessionHandle,
        pub(crate) store: SessionStore,
        pub(crate) key: Key,
        pub(crate) set_cookie: bool,
        pub(crate) secure: bool,
    }
}

impl<F, E, ResBody> Future for ResponseFuture<F>
where
    F: Future<Output = Result<Response<ResBody>, E>>,
{
    type Output = Result<Response<ResBody>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        let mut response = ready!(this.inner.poll(cx))?;

        let session = this.handle.snapshot();
        let session_id = session.id().to_string();
        this.store.save(session);

        if *this.set_cookie {
            let cookie = Cookie::build((SESSION_COOKIE_NAME, session_id))
                .path("/")
                .http_only(true)
                .secure(*this.secure)
                .same_site(SameSite::Lax)
                .expires(Expiration::Session);

            let mut jar = CookieJar::new();
            jar.signed_mut(this.key).add(cookie);

            for cookie in jar.delta() {
                match HeaderValue::from_str(&cookie.encoded().to_string()) {
                    Ok(value) => {
                        response.headers_mut().append(header::SET_COOKIE, value);
                    }
                    Err(error) => error!(?error, "failed to encode session cookie"),
                }
            }
        }

        Poll::Ready(Ok(response))
    }
}

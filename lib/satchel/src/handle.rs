use crate::{Flash, Level, Session};
use std::sync::{Mutex, MutexGuard, PoisonError};
use triomphe::Arc;

/// Shared access to the session of the current request
///
/// The session is written back to the store once the response has been produced.
#[derive(Clone)]
pub struct SessionHandle {
    pub(crate) inner: Arc<Mutex<Session>>,
}

impl SessionHandle {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Lock the session
    ///
    /// Don't hold the guard across an `.await`
    pub fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn push_flash<M>(&self, level: Level, message: M)
    where
        M: Into<String>,
    {
        self.lock().push_flash(level, message);
    }

    #[inline]
    pub fn take_flashes(&self) -> Vec<Flash> {
        self.lock().take_flashes()
    }

    pub(crate) fn snapshot(&self) -> Session {
        self.lock().clone()
    }
}

#[cfg(feature = "axum")]
mod axum_impl {
    use super::SessionHandle;
    use axum_core::extract::FromRequestParts;
    use http::{request::Parts, StatusCode};

    impl<S> FromRequestParts<S> for SessionHandle
    where
        S: Sync,
    {
        type Rejection = (StatusCode, &'static str);

        async fn from_request_parts(
            parts: &mut Parts,
            _state: &S,
        ) -> Result<Self, Self::Rejection> {
            parts.extensions.get::<Self>().cloned().ok_or_else(|| {
                error!("service not wrapped by the session layer");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error has occurred. Please try again later.",
                )
            })
        }
    }
}

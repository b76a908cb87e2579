use crate::{SessionService, SessionStore};
use cookie::Key;
use tower::Layer;

#[derive(Clone)]
pub struct SessionLayer {
    store: SessionStore,
    key: Key,
    secure: bool,
}

impl SessionLayer {
    /// Sessions are looked up in `store`, the session cookie is signed with `key`
    #[must_use]
    pub fn new(store: SessionStore, key: Key) -> Self {
        Self {
            store,
            key,
            secure: false,
        }
    }

    /// Only send the session cookie over HTTPS
    #[must_use]
    pub fn secure(self, secure: bool) -> Self {
        Self { secure, ..self }
    }
}

impl<S> Layer<S> for SessionLayer {
    type Service = SessionService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SessionService::new(inner, self.store.clone(), self.key.clone(), self.secure)
    }
}

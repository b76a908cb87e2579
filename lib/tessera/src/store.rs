use crate::Token;

/// Token waiting to be submitted back
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingToken {
    pub value: Token,

    /// Unix timestamp (seconds) the token was issued at
    pub issued_at: i64,
}

/// Slot in the session state that holds the pending token
pub trait TokenStore {
    fn load_token(&self) -> Option<PendingToken>;

    /// Replace the pending token, `None` clears it
    fn store_token(&mut self, token: Option<PendingToken>);
}

impl TokenStore for Option<PendingToken> {
    fn load_token(&self) -> Option<PendingToken> {
        self.clone()
    }

    fn store_token(&mut self, token: Option<PendingToken>) {
        *self = token;
    }
}

#[cfg(feature = "satchel")]
mod satchel_impl {
    use super::{PendingToken, TokenStore};
    use crate::keys;
    use satchel::Session;

    impl TokenStore for Session {
        fn load_token(&self) -> Option<PendingToken> {
            let value = self.get(keys::TOKEN)?;
            let issued_at = self.get_parsed(keys::TOKEN_TIME)?;

            Some(PendingToken {
                value: value.into(),
                issued_at,
            })
        }

        fn store_token(&mut self, token: Option<PendingToken>) {
            if let Some(token) = token {
                self.insert(keys::TOKEN, token.value);
                self.insert(keys::TOKEN_TIME, token.issued_at);
            } else {
                self.remove(keys::TOKEN);
                self.remove(keys::TOKEN_TIME);
            }
        }
    }

    #[cfg(test)]
    mod test {
        use crate::{keys, CsrfManager, TokenStore};
        use satchel::Session;

        #[test]
        fn reads_and_writes_the_same_slots() {
            let manager = CsrfManager::default();
            let mut session = Session::new();

            let token = manager.issue_token(&mut session);
            assert_eq!(session.get(keys::TOKEN), Some(token.as_str()));
            assert!(session.get_parsed::<i64>(keys::TOKEN_TIME).is_some());
            assert_eq!(session.load_token().unwrap().value, token);

            session.store_token(None);
            assert!(!session.contains(keys::TOKEN));
            assert!(!session.contains(keys::TOKEN_TIME));
        }
    }
}

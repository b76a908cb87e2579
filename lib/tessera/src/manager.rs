use crate::{Clock, PendingToken, Token, TokenStore, DEFAULT_TTL, RANDOM_DATA_LEN};
use hex_simd::AsciiCase;
use rand::{rngs::OsRng, RngCore};
use std::time::Duration;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Outcome of checking a submitted token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validation {
    /// Token matched and a fresh one was issued
    Valid,

    /// No token was pending
    Missing,

    /// The pending token outlived its TTL
    Expired,

    /// The submitted value didn't match the pending token
    Mismatched,
}

impl Validation {
    #[inline]
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

/// Issues, validates and rotates CSRF tokens
#[derive(Clone)]
pub struct CsrfManager {
    clock: Clock,
    ttl: Duration,
}

impl CsrfManager {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(Clock::new(), ttl)
    }

    #[must_use]
    pub fn with_clock(clock: Clock, ttl: Duration) -> Self {
        Self { clock, ttl }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn is_expired(&self, issued_at: i64) -> bool {
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        self.clock.now().saturating_sub(issued_at) > ttl
    }

    /// Generate a new token and make it the pending one
    ///
    /// Any previously pending token is overwritten.
    pub fn issue_token<S>(&self, store: &mut S) -> Token
    where
        S: TokenStore + ?Sized,
    {
        let mut random = Zeroizing::new([0_u8; RANDOM_DATA_LEN]);
        OsRng.fill_bytes(&mut *random);

        let bytes: &[u8] = &*random;
        let token: Token = hex_simd::encode_to_string(bytes, AsciiCase::Lower).into();

        store.store_token(Some(PendingToken {
            value: token.clone(),
            issued_at: self.clock.now(),
        }));

        token
    }

    /// Token to embed into a form
    ///
    /// Returns the pending token while it is still fresh, otherwise issues a new one.
    pub fn current_token<S>(&self, store: &mut S) -> Token
    where
        S: TokenStore + ?Sized,
    {
        match store.load_token() {
            Some(pending) if !self.is_expired(pending.issued_at) => pending.value,
            _ => self.issue_token(store),
        }
    }

    /// Check a submitted token and report why it failed, if it did
    ///
    /// The pending token is consumed no matter the outcome.
    pub fn check<S>(&self, store: &mut S, submitted: Option<&str>) -> Validation
    where
        S: TokenStore + ?Sized,
    {
        let pending = store.load_token();
        store.store_token(None);

        let Some(pending) = pending else {
            return Validation::Missing;
        };

        if self.is_expired(pending.issued_at) {
            debug!(issued_at = pending.issued_at, "csrf token expired");
            return Validation::Expired;
        }

        let submitted = submitted.unwrap_or_default();
        let matches: bool = pending
            .value
            .as_str()
            .as_bytes()
            .ct_eq(submitted.as_bytes())
            .into();

        if matches {
            self.issue_token(store);
            Validation::Valid
        } else {
            Validation::Mismatched
        }
    }

    /// Boolean form of [`check`](Self::check)
    #[must_use]
    pub fn validate<S>(&self, store: &mut S, submitted: Option<&str>) -> bool
    where
        S: TokenStore + ?Sized,
    {
        self.check(store, submitted).is_valid()
    }
}

impl Default for CsrfManager {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

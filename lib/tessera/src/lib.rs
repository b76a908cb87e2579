#![doc = include_str!("../README.md")]

#[macro_use]
extern crate tracing;

pub use self::{
    clock::{Clock, DeltaDirection, MockHandle},
    manager::{CsrfManager, Validation},
    newtypes::*,
    store::{PendingToken, TokenStore},
};

use std::time::Duration;

mod clock;
mod manager;
mod store;

/// Lifetime of a token unless configured otherwise
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Number of random bytes in a token (hex-encoding doubles the length)
const RANDOM_DATA_LEN: usize = 32;

/// Session keys the pending token lives under
///
/// Every read and write site goes through these constants.
pub mod keys {
    pub const TOKEN: &str = "csrf_token";
    pub const TOKEN_TIME: &str = "csrf_token_time";
}

mod newtypes {
    #[aliri_braid::braid]
    pub struct Token;
}

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Configuration {
    /// Secret the session cookie is signed with (at least 32 bytes)
    ///
    /// A random key is generated when absent, which invalidates all sessions on restart.
    pub secret: Option<SmolStr>,
    pub idle_timeout_secs: u64,
    pub max_sessions: u64,
    pub secure_cookie: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            secret: None,
            idle_timeout_secs: 24 * 60 * 60,
            max_sessions: 10_000,
            secure_cookie: false,
        }
    }
}

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

fn default_base_path() -> SmolStr {
    SmolStr::new_static("/")
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    /// Path prefix the application is mounted under
    #[serde(default = "default_base_path")]
    pub base_path: SmolStr,
    pub port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

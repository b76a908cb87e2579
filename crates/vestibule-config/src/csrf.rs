use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Configuration {
    pub token_ttl_secs: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            token_ttl_secs: 30 * 60,
        }
    }
}

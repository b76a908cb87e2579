use crate::{Flash, Level, SessionId, SessionIdRef};
use smol_str::SmolStr;
use std::{collections::HashMap, str::FromStr};
use uuid::Uuid;

/// Per-client key-value state
///
/// Values are stored as strings. Typed values go through [`FromStr`] and [`ToString`],
/// so writes never fail.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    values: HashMap<SmolStr, String>,
    flashes: Vec<Flash>,
}

impl Session {
    /// Create an empty session with a freshly generated ID
    #[must_use]
    pub fn new() -> Self {
        let id = Uuid::new_v4().simple().to_string();

        Self {
            id: id.into(),
            values: HashMap::new(),
            flashes: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionIdRef {
        &self.id
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Read a value and parse it, treating unparseable values as absent
    #[must_use]
    pub fn get_parsed<T>(&self, key: &str) -> Option<T>
    where
        T: FromStr,
    {
        self.get(key).and_then(|value| value.parse().ok())
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<SmolStr>,
        V: ToString,
    {
        self.values.insert(key.into(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn push_flash<M>(&mut self, level: Level, message: M)
    where
        M: Into<String>,
    {
        self.flashes.push(Flash {
            level,
            message: message.into(),
        });
    }

    /// Drain the queued flash messages
    pub fn take_flashes(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.flashes)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[macro_use]
extern crate tracing;

pub mod application;
pub mod cli;
pub mod consts;
pub mod http;
pub mod signal;
pub mod state;
pub mod store;
pub mod template;

pub use self::application::Application;

use self::{
    state::Zustand,
    store::{MessageStore, TaskStore},
};
use std::time::Duration;
use tessera::CsrfManager;
use vestibule_config::Configuration;

#[must_use]
pub fn initialise_state(config: &Configuration) -> Zustand {
    Zustand {
        csrf: CsrfManager::new(Duration::from_secs(config.csrf.token_ttl_secs)),
        messages: MessageStore::new(),
        tasks: TaskStore::new(),
    }
}

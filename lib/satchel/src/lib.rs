#![doc = include_str!("../README.md")]

#[macro_use]
extern crate tracing;

pub use self::{
    flash::{Flash, Level},
    future::ResponseFuture,
    handle::SessionHandle,
    layer::SessionLayer,
    newtypes::*,
    service::SessionService,
    session::Session,
    store::SessionStore,
};

mod flash;
mod future;
mod handle;
mod layer;
mod service;
mod session;
mod store;

const SESSION_COOKIE_NAME: &str = "VESTIBULE_SESSION";

mod newtypes {
    #[aliri_braid::braid]
    pub struct SessionId;
}

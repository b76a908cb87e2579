//! Request routing
//!
//! A request is turned into a routing key by [`normalize`], combined with its method into a
//! [`Locator`] by [`resolve`], and handed to whatever handler was registered for that locator in the
//! [`RouteTable`]. The [`Dispatcher`] runs these steps and answers `404` whenever one of them comes up empty.

#[macro_use]
extern crate tracing;

pub use self::{
    context::RequestContext,
    dispatch::{dispatch, Dispatcher},
    error::RoutingError,
    normalize::{normalize, INDEX_ROUTE},
    resolve::{resolve, resolve_raw, Locator, LocatorRef, RouteMethod},
    table::RouteTable,
};

mod context;
mod dispatch;
mod error;
mod normalize;
mod resolve;
mod table;

use crate::{normalize, resolve, Locator, LocatorRef, RouteMethod};
use axum::{
    handler::Handler,
    routing::{self, MethodRouter},
};
use std::collections::HashMap;

/// Static table of the handlers an application exposes
///
/// Keys go through [`normalize`] on registration, so `"/Contact/"` and `"contact"` name the same route.
pub struct RouteTable<S = ()> {
    routes: HashMap<Locator, MethodRouter<S>>,
}

impl<S> RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Register a route
    ///
    /// # Panics
    ///
    /// Registering the same key and method twice panics. Tables are built once at startup.
    #[must_use]
    #[track_caller]
    pub fn route(mut self, route_key: &str, method: RouteMethod, route: MethodRouter<S>) -> Self {
        let locator = resolve(&normalize(route_key, "/"), method);
        assert!(
            !self.routes.contains_key(&locator),
            "duplicate route registration for {locator}"
        );

        self.routes.insert(locator, route);
        self
    }

    #[must_use]
    #[track_caller]
    pub fn get<H, T>(self, route_key: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.route(route_key, RouteMethod::Get, routing::any(handler))
    }

    #[must_use]
    #[track_caller]
    pub fn post<H, T>(self, route_key: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.route(route_key, RouteMethod::Post, routing::any(handler))
    }

    /// Provide the state, yielding a table the dispatcher can own
    #[must_use]
    pub fn with_state<S2>(self, state: S) -> RouteTable<S2> {
        let routes = self
            .routes
            .into_iter()
            .map(|(locator, route)| (locator, route.with_state(state.clone())))
            .collect();

        RouteTable { routes }
    }

    pub(crate) fn lookup(&self, locator: &LocatorRef) -> Option<&MethodRouter<S>> {
        self.routes.get(locator)
    }
}

impl<S> Default for RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

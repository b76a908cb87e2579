use crate::RoutingError;
use strum::{AsRefStr, Display, EnumString};

/// Methods the router accepts
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum RouteMethod {
    Get,
    Post,
}

impl RouteMethod {
    #[must_use]
    pub fn as_lowercase(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
        }
    }
}

mod newtypes {
    /// Name of the handler for a `(routing key, method)` pair, e.g. `contact_post`
    #[aliri_braid::braid]
    pub struct Locator;
}

pub use self::newtypes::{Locator, LocatorRef};

/// Compute the locator of the handler responsible for `route_key` and `method`
///
/// This is a naming convention, not a lookup: every pair maps to a locator, whether or not a handler is registered for it.
#[must_use]
pub fn resolve(route_key: &str, method: RouteMethod) -> Locator {
    format!("{route_key}_{}", method.as_lowercase()).into()
}

/// Like [`resolve`] but checks a raw method string against the allow-list first
pub fn resolve_raw(route_key: &str, raw_method: &str) -> Result<Locator, RoutingError> {
    let method = raw_method
        .parse::<RouteMethod>()
        .map_err(|_| RoutingError::MethodNotAllowed(raw_method.to_uppercase()))?;

    Ok(resolve(route_key, method))
}

use crate::{http::handler, state::Zustand};
use strum::Display;
use vestibule_routing::RouteTable;

/// The applications served by this crate
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum Application {
    Guestbook,
    TaskManager,
}

impl Application {
    /// Human-readable name shown in page titles
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Guestbook => "Guest Book",
            Self::TaskManager => "Todo List",
        }
    }

    /// Routing keys pages link to
    #[must_use]
    pub fn route_keys(self) -> &'static [&'static str] {
        match self {
            Self::Guestbook => &["index", "guestbook", "contact"],
            Self::TaskManager => &["index", "add", "edit", "delete"],
        }
    }

    #[must_use]
    pub fn routes(self) -> RouteTable<Zustand> {
        match self {
            Self::Guestbook => RouteTable::new()
                .get("index", handler::guestbook::index::get)
                .get("guestbook", handler::guestbook::guestbook::get)
                .get("contact", handler::guestbook::contact::get)
                .post("contact", handler::guestbook::contact::post),
            Self::TaskManager => RouteTable::new()
                .get("index", handler::tasks::index::get)
                .get("add", handler::tasks::add::get)
                .post("add", handler::tasks::add::post)
                .get("edit", handler::tasks::edit::get)
                .post("edit", handler::tasks::edit::post)
                .post("delete", handler::tasks::delete::post),
        }
    }
}

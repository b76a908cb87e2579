use uuid::Uuid;
use vestibule_error::{vestibule_error, ErrorType, Result};

pub mod add;
pub mod delete;
pub mod edit;
pub mod index;

/// Malformed IDs are treated like unknown ones
fn parse_id(raw: &str) -> Result<Uuid> {
    raw.trim()
        .parse()
        .map_err(|error| vestibule_error!(type = ErrorType::NotFound, error))
}

/// Routing key of the application root
pub const INDEX_ROUTE: &str = "index";

/// Canonicalise a raw request URI into a routing key
///
/// - drops the query string and fragment
/// - lower-cases the path
/// - strips `base_path` if the application is mounted below the root
/// - trims surrounding slashes
/// - maps the empty path to [`INDEX_ROUTE`]
#[must_use]
pub fn normalize(raw_uri: &str, base_path: &str) -> String {
    let path = raw_uri
        .split_once(['?', '#'])
        .map_or(raw_uri, |(path, _)| path)
        .to_lowercase();

    let path = if base_path.is_empty() || base_path == "/" {
        path.as_str()
    } else {
        path.strip_prefix(base_path).unwrap_or(path.as_str())
    };

    let path = path.trim_matches('/');
    if path.is_empty() {
        INDEX_ROUTE.to_string()
    } else {
        path.to_string()
    }
}

//! URL utility functions for reading the current location

/// Raw `location.search` of the page, including the leading `?`.
/// Reads window.location directly; use it when the router's location
/// might not be initialized yet
pub fn current_search() -> String {
    gloo_utils::window().location().search().unwrap_or_default()
}

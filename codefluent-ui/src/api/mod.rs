//! API Access
//!
//! Base-URL resolution and the typed client for the CodeFluent server.

mod client;

pub use client::*;

/// Local-storage key that overrides the API origin
pub const API_URL_KEY: &str = "codefluent_api_url";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Request never completed or the server answered non-2xx
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Stored override when set and non-blank, else the page origin. Trailing
/// slashes are dropped.
pub fn resolve_base(stored: Option<String>, origin: &str) -> String {
    let base = stored
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| origin.to_string());
    base.trim().trim_end_matches('/').to_string()
}

/// API origin for this page
pub fn get_api_base() -> String {
    let window = web_sys::window();
    let stored = window
        .as_ref()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());
    let origin = window
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    resolve_base(stored, &origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_default() {
        assert_eq!(resolve_base(None, "http://localhost:8000"), "http://localhost:8000");
        assert_eq!(
            resolve_base(Some("  ".into()), "http://localhost:8000"),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_stored_override_wins() {
        assert_eq!(
            resolve_base(Some("http://10.0.0.5:9000/".into()), "http://localhost:8000"),
            "http://10.0.0.5:9000"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::Network("HTTP 502: scorer down".into()).to_string(),
            "Network error: HTTP 502: scorer down"
        );
        assert_eq!(ApiError::Decode("eof".into()).to_string(), "Invalid response: eof");
    }
}

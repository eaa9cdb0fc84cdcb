//! API location
//!
//! The backend normally sits behind the same origin as the page, so every
//! path starts with `/api/`. Set `ARKEO_API_BASE` at build time to point the
//! client somewhere else.

/// Base URL for API requests, without a trailing slash
pub fn api_base() -> String {
    if let Some(base) = option_env!("ARKEO_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Full URL for an API path
///
/// ```ignore
/// let url = api_url("/api/main-codes/?page=1");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

//! Client configuration resolved at build time.
//!
//! WASM bundles cannot read the process environment at runtime, so the API
//! base URL is baked in from `PORTAL_API_BASE_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `PORTAL_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Location of the portal REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Load from the build-time `PORTAL_API_BASE_URL`, falling back to `/api`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_base_url(option_env!("PORTAL_API_BASE_URL"))
    }

    /// Build from an optional base URL. Blank values fall back to the default
    /// and trailing slashes are stripped.
    #[must_use]
    pub fn from_base_url(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Join `path` onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_base_url(None)
    }
}

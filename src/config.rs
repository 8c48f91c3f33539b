// Process-wide configuration.
// The service origin is resolved once at startup and stays fixed for the process lifetime.

const DEFAULT_API_URL: &str = "https://med-research-backend.onrender.com";

/// Environment variable overriding the research service origin.
pub const API_URL_VAR: &str = "SIFT_API_URL";

/// Immutable application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the research service, without a trailing slash.
    base_url: String,
}

impl Config {
    /// Build a config with an explicit service origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve the config from the environment, falling back to the default origin.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

//! Client configuration: where the users endpoint lives and how long a request may
//! take. Values come from CLI flags or their environment fallbacks; none of them
//! are secret.

use crate::errors::FetchError;
use std::time::Duration;
use url::Url;

/// Base URL used when none is configured (the local demo API).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Default request timeout, in seconds, as accepted on the command line.
pub const DEFAULT_TIMEOUT_SECS: &str = "10";
/// Default request timeout applied to the users fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: APP_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Config pointing at `base_url`, keeping the default timeout and user agent.
    /// Blank values fall back to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let mut config = Self::default();
        if let Some(value) = normalize_value(base_url) {
            config.base_url = value;
        }
        config
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for `path` under the configured base.
    ///
    /// # Errors
    /// Returns `FetchError::Config` if the result is not an absolute `http(s)` URL.
    pub fn endpoint_url(&self, path: &str) -> Result<String, FetchError> {
        let url = build_url_with_base(&self.base_url, path);
        let parsed = Url::parse(&url).map_err(|err| {
            FetchError::Config(format!("invalid base URL {}: {err}", self.base_url))
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(FetchError::Config(format!(
                "unsupported scheme {scheme} in base URL {}",
                self.base_url
            ))),
        }
    }
}

/// Joins a base URL and a path with exactly one slash between them.
#[must_use]
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Trims a configured value, treating blank input as unset.
#[must_use]
pub fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  http://api.local "),
            Some("http://api.local".to_string())
        );
    }

    #[test]
    fn build_url_with_base_joins_with_single_slash() {
        assert_eq!(
            build_url_with_base("http://api.local", "/api/users"),
            "http://api.local/api/users"
        );
        assert_eq!(
            build_url_with_base("http://api.local///", "api/users"),
            "http://api.local/api/users"
        );
        assert_eq!(
            build_url_with_base(" http://api.local/v1/ ", " /api/users "),
            "http://api.local/v1/api/users"
        );
        assert_eq!(build_url_with_base("", "/api/users"), "/api/users");
    }

    #[test]
    fn new_falls_back_to_default_base_url() {
        assert_eq!(AppConfig::new("  ").base_url, DEFAULT_BASE_URL);
        assert_eq!(
            AppConfig::new("https://users.example").base_url,
            "https://users.example"
        );
    }

    #[test]
    fn default_user_agent_names_the_crate() {
        let config = AppConfig::default();
        assert!(config.user_agent.starts_with("userlist/"));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(
            DEFAULT_TIMEOUT_SECS.parse::<u64>().ok(),
            Some(DEFAULT_TIMEOUT.as_secs())
        );
    }

    #[test]
    fn endpoint_url_accepts_http_and_https() {
        let config = AppConfig::new("http://127.0.0.1:8000/");
        assert_eq!(
            config.endpoint_url("/api/users").ok().as_deref(),
            Some("http://127.0.0.1:8000/api/users")
        );

        let config = AppConfig::new("https://users.example");
        assert!(config.endpoint_url("/api/users").is_ok());
    }

    #[test]
    fn endpoint_url_rejects_relative_and_foreign_schemes() {
        let relative = AppConfig::new("users.example");
        assert!(matches!(
            relative.endpoint_url("/api/users"),
            Err(FetchError::Config(_))
        ));

        let ftp = AppConfig::new("ftp://users.example");
        assert!(matches!(
            ftp.endpoint_url("/api/users"),
            Err(FetchError::Config(message)) if message.contains("unsupported scheme ftp")
        ));
    }
}

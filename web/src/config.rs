//! Backend configuration, built once at startup and passed into the page.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TRIMMER_BACKEND_URL was not set when the page was built")]
    Missing,
    #[error("backend url {url:?} is invalid: {reason}")]
    Invalid { url: String, reason: String },
}

/// Where the shortening backend lives.
///
/// The base is stored without trailing slashes so that short urls are
/// always `<base>/<code>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    backend_url: String,
}

impl Config {
    pub fn new(backend_url: &str) -> Result<Self, ConfigError> {
        let trimmed = backend_url.trim().trim_end_matches('/');
        let invalid = |reason: String| ConfigError::Invalid {
            url: backend_url.to_string(),
            reason,
        };

        let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
        }

        Ok(Self {
            backend_url: trimmed.to_string(),
        })
    }

    /// Reads the address baked in at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("TRIMMER_BACKEND_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Err(ConfigError::Missing),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Full short url for a code returned by the backend.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.backend_url, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_concatenates_base_and_code() {
        let config = Config::new("https://short.ly").unwrap();
        assert_eq!(config.short_url("abc123"), "https://short.ly/abc123");
    }

    #[test]
    fn test_trailing_slashes_are_stripped() {
        let config = Config::new("https://short.ly//").unwrap();
        assert_eq!(config.backend_url(), "https://short.ly");
        assert_eq!(config.short_url("x"), "https://short.ly/x");
    }

    #[test]
    fn test_relative_url_is_invalid() {
        let err = Config::new("short.ly").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_non_http_scheme_is_invalid() {
        let err = Config::new("ftp://short.ly").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}

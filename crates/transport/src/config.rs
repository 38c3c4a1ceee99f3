//! Client configuration.
//!
//! Deserialisable so the CLI can read it from a TOML file; every field except
//! `base_url` has a default.

use std::time::Duration;

use portal::{PortalError, PortalResult};
use serde::Deserialize;
use url::Url;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                                  AppleWebKit/537.36 (KHTML, like Gecko) \
                                  Chrome/131.0.0.0 Safari/537.36";

/// Settings for [`crate::HttpPortalClient`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Root URL of the portal (e.g. `http://jw.example.edu.cn/`). Page paths
    /// are appended to its path.
    pub base_url: String,

    /// Upper bound on a whole request, including reading the body. Must be
    /// non-zero; there is no "no timeout" setting.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Upper bound on establishing the TCP/TLS connection. Must be non-zero.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// `User-Agent` header. Some deployments reject unknown agents.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl ClientConfig {
    /// Creates a configuration with default timeouts and user agent.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connect timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Checks that both timeouts are non-zero.
    ///
    /// A zero [`Duration`] would make every request fail immediately, so it is
    /// refused at construction instead.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Configuration`] naming the offending field.
    pub fn validate_timeouts(&self) -> PortalResult<()> {
        for (field, secs) in [
            ("request_timeout_secs", self.request_timeout_secs),
            ("connect_timeout_secs", self.connect_timeout_secs),
        ] {
            if secs == 0 {
                return Err(PortalError::configuration(format!(
                    "{field} must be greater than zero"
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Configuration`] if the URL does not parse, is not
    /// `http`/`https`, or cannot carry a path (e.g. `mailto:`).
    pub fn parsed_base_url(&self) -> PortalResult<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            PortalError::configuration(format!("invalid base URL '{}': {e}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(PortalError::configuration(format!(
                "base URL '{}' must use http or https",
                self.base_url
            )));
        }
        if url.cannot_be_a_base() {
            return Err(PortalError::configuration(format!(
                "base URL '{}' cannot carry a path",
                self.base_url
            )));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let config = ClientConfig::new("http://jw.example.edu.cn/");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn toml_with_only_base_url_uses_defaults() {
        let config: ClientConfig = toml::from_str(r#"base_url = "http://jw.local/""#).unwrap();
        assert_eq!(config, ClientConfig::new("http://jw.local/"));
    }

    #[test]
    fn toml_overrides_timeouts() {
        let config: ClientConfig = toml::from_str(
            r#"
            base_url = "https://jw.local/jwweb"
            request_timeout_secs = 5
            connect_timeout_secs = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.connect_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn malformed_base_url_is_a_configuration_error() {
        let err = ClientConfig::new("not a url").parsed_base_url().unwrap_err();
        assert!(matches!(err, PortalError::Configuration { .. }));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert!(ClientConfig::new("ftp://jw.local/").parsed_base_url().is_err());
        assert!(ClientConfig::new("mailto:admin@jw.local").parsed_base_url().is_err());
    }

    #[test]
    fn zero_request_timeout_is_rejected() {
        let mut config = ClientConfig::new("http://jw.local/");
        config.request_timeout_secs = 0;
        let err = config.validate_timeouts().unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));
    }

    #[test]
    fn zero_connect_timeout_from_toml_is_rejected() {
        let config: ClientConfig = toml::from_str(
            r#"
            base_url = "http://jw.local/"
            connect_timeout_secs = 0
            "#,
        )
        .unwrap();
        let err = config.validate_timeouts().unwrap_err();
        assert!(matches!(err, PortalError::Configuration { .. }));
        assert!(err.to_string().contains("connect_timeout_secs"));
    }

    #[test]
    fn default_timeouts_pass_validation() {
        assert!(ClientConfig::new("http://jw.local/").validate_timeouts().is_ok());
    }
}

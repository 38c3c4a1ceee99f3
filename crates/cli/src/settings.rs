//! Resolves [`ClientConfig`] from the config file, environment, and flags.
//!
//! Precedence, lowest first: TOML file, `PORTAL_BASE_URL`, command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use transport::ClientConfig;

/// On-disk settings. Every key is optional so flags can fill the gaps.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Merges file settings with flag overrides into a client configuration.
pub fn resolve(
    file: FileSettings,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<ClientConfig> {
    let base_url = base_url.or(file.base_url).context(
        "no portal URL configured: pass --base-url, set PORTAL_BASE_URL, \
         or add base_url to the config file",
    )?;

    let mut config = ClientConfig::new(base_url);
    if let Some(secs) = timeout_secs.or(file.request_timeout_secs) {
        config.request_timeout_secs = secs;
    }
    if let Some(secs) = file.connect_timeout_secs {
        config.connect_timeout_secs = secs;
    }
    if let Some(agent) = file.user_agent {
        config.user_agent = agent;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file() {
        let file = FileSettings {
            base_url: Some("http://file.local/".into()),
            request_timeout_secs: Some(60),
            ..FileSettings::default()
        };
        let config = resolve(file, Some("http://flag.local/".into()), Some(5)).unwrap();
        assert_eq!(config.base_url, "http://flag.local/");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn file_fills_missing_flags() {
        let file: FileSettings = toml::from_str(
            r#"
            base_url = "http://file.local/"
            connect_timeout_secs = 3
            user_agent = "portal-cli"
            "#,
        )
        .unwrap();
        let config = resolve(file, None, None).unwrap();
        assert_eq!(config.base_url, "http://file.local/");
        assert_eq!(config.connect_timeout_secs, 3);
        assert_eq!(config.user_agent, "portal-cli");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn missing_base_url_is_an_error() {
        assert!(resolve(FileSettings::default(), None, None).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed: Result<FileSettings, _> = toml::from_str("base_uri = \"typo\"");
        assert!(parsed.is_err());
    }
}

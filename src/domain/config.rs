//! Composer Configuration
//!
//! Supplied once when a composer is created and immutable afterwards.
//! Everything except the send collaborator can be read from `composer.toml`.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::compose::sender::MailSender;
use crate::constants::{SENT_BANNER_MS, SIMULATED_SEND_MS};
use crate::error::Result;
use crate::helpers::get_config_file;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "MAIL_COMPOSER_CONFIG";

/// Delays driving the simulated send and the success banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComposeTimings {
    /// Wait used in place of a collaborator when none is configured
    pub simulated_send_ms: u64,
    /// How long the Sent state lasts before reverting to Idle
    pub sent_banner_ms: u64,
}

impl ComposeTimings {
    pub fn simulated_send(&self) -> Duration {
        Duration::from_millis(self.simulated_send_ms)
    }

    pub fn sent_banner(&self) -> Duration {
        Duration::from_millis(self.sent_banner_ms)
    }
}

impl Default for ComposeTimings {
    fn default() -> Self {
        Self {
            simulated_send_ms: SIMULATED_SEND_MS,
            sent_banner_ms: SENT_BANNER_MS,
        }
    }
}

/// Composer configuration
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// Initial recipient
    pub default_to: Option<String>,
    /// Initial subject
    pub default_subject: Option<String>,
    /// Signature appended after two blank lines to every fresh body
    pub signature: Option<String>,
    pub timings: ComposeTimings,
    /// Send collaborator; `None` falls back to a simulated send
    #[serde(skip)]
    pub on_send: Option<Arc<dyn MailSender>>,
}

impl MailConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No composer config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        tracing::info!("Loaded composer config from {}", path.display());
        Ok(config)
    }

    /// Load from `$MAIL_COMPOSER_CONFIG`, else `composer.toml` in the config dir
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => Self::load_from(&get_config_file()?),
        }
    }

    /// Attach the send collaborator
    pub fn with_sender(mut self, sender: Arc<dyn MailSender>) -> Self {
        self.on_send = Some(sender);
        self
    }

    /// Body a fresh draft starts with: two blank lines then the signature
    pub fn signature_block(&self) -> String {
        match self.signature.as_deref() {
            Some(signature) if !signature.is_empty() => format!("\n\n{signature}"),
            _ => String::new(),
        }
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("default_to", &self.default_to)
            .field("default_subject", &self.default_subject)
            .field("signature", &self.signature)
            .field("timings", &self.timings)
            .field("on_send", &self.on_send.as_ref().map(|_| "<sender>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_block_prefixes_blank_lines() {
        let config = MailConfig {
            signature: Some("— Jane".to_string()),
            ..Default::default()
        };
        assert_eq!(config.signature_block(), "\n\n— Jane");
    }

    #[test]
    fn empty_or_missing_signature_gives_empty_body() {
        assert_eq!(MailConfig::default().signature_block(), "");

        let config = MailConfig {
            signature: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.signature_block(), "");
    }

    #[test]
    fn parses_toml_with_partial_timings() {
        let config = MailConfig::from_toml(
            r#"
            default_to = "a@x.com"
            signature = "— Jane"

            [timings]
            sent_banner_ms = 5000
            "#,
        )
        .expect("valid config");

        assert_eq!(config.default_to.as_deref(), Some("a@x.com"));
        assert_eq!(config.default_subject, None);
        assert_eq!(config.timings.sent_banner_ms, 5000);
        assert_eq!(config.timings.simulated_send_ms, SIMULATED_SEND_MS);
        assert!(config.on_send.is_none());
    }

    #[test]
    fn empty_toml_is_default() {
        let config = MailConfig::from_toml("").expect("empty config");
        assert_eq!(config.timings, ComposeTimings::default());
        assert_eq!(config.timings.sent_banner(), Duration::from_millis(3000));
        assert_eq!(config.timings.simulated_send(), Duration::from_millis(1500));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = MailConfig::from_toml("default_to = [");
        assert!(matches!(result, Err(crate::error::Error::TomlDe { .. })));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("mail-composer-does-not-exist.toml");
        let config = MailConfig::load_from(&path).expect("defaults");
        assert!(config.default_to.is_none());
    }
}

//! Site configuration module.
//!
//! Identity strings shown in the page chrome and the email-relay
//! identifiers live in `site.toml` at the repository root, embedded into
//! the bundle at build time. Keeping them in configuration rather than
//! code means a fork only edits one file to point the contact form at
//! its own relay account.
//!
//! ## Configuration Options
//!
//! ```toml
//! [site]
//! owner = "Biruk"                   # Name in the brand mark and footer
//! title = "Biruk | Portfolio"       # Browser tab title
//! github_url = "https://github.com/babi127"
//! linkedin_url = "https://www.linkedin.com/in/biruk-tesfaye-0642b4284/"
//!
//! [relay]
//! service_id = "service_xxxxxxx"    # EmailJS service
//! template_id = "template_xxxxxxx"  # EmailJS template
//! public_key = "XXXXXXXXXXXXXXXXX"  # EmailJS public key
//! endpoint = "https://api.emailjs.com/api/v1.0/email/send"
//! ```
//!
//! The relay identifiers ship inside the client bundle; that is how a
//! backend-less contact form works, and EmailJS public keys are meant to
//! be publishable. Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use thiserror::Error;

/// Raw configuration embedded at build time.
const EMBEDDED_CONFIG: &str = include_str!("../site.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have defaults so the file may be sparse, but a usable
/// relay setup requires all three identifiers (see
/// [`RelayConfig::validate`]). Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity strings rendered in the page chrome.
    pub site: SiteIdentity,
    /// Email-relay identifiers used by the contact form.
    pub relay: RelayConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig { site: SiteIdentity::default(), relay: RelayConfig::default() }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.relay.validate()
    }
}

/// Names and profile links shown around the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteIdentity {
    /// Name in the brand mark, hero heading and footer copyright.
    pub owner: String,
    /// Browser tab title.
    pub title: String,
    pub github_url: String,
    pub linkedin_url: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        SiteIdentity {
            owner: "Biruk".into(),
            title: "Biruk | Portfolio".into(),
            github_url: "https://github.com/babi127".into(),
            linkedin_url: "https://www.linkedin.com/in/biruk-tesfaye-0642b4284/".into(),
        }
    }
}

/// Identifiers for the transactional-email relay (EmailJS).
///
/// Defaults are empty: the identifiers belong in `site.toml`, not in
/// source. An empty setup renders fine, the relay just rejects
/// submissions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    /// Public key, passed to the relay as its `user_id` field.
    pub public_key: String,
    /// Send endpoint; overridable to point at a stub while testing.
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".into(),
        }
    }
}

impl RelayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_id.is_empty() {
            return Err(ConfigError::Validation("relay.service_id must not be empty".into()));
        }
        if self.template_id.is_empty() {
            return Err(ConfigError::Validation("relay.template_id must not be empty".into()));
        }
        if self.public_key.is_empty() {
            return Err(ConfigError::Validation("relay.public_key must not be empty".into()));
        }
        if !self.endpoint.starts_with("https://") && !self.endpoint.starts_with("http://") {
            return Err(ConfigError::Validation(format!(
                "relay.endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        Ok(())
    }
}

/// Parse and validate the embedded `site.toml`.
pub fn load() -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(EMBEDDED_CONFIG)?;
    config.validate()?;
    Ok(config)
}

/// The embedded configuration, or defaults when it is unusable.
///
/// The page must render even with a broken relay setup, so a bad
/// `site.toml` is logged and degraded rather than fatal.
pub fn load_or_default() -> SiteConfig {
    match load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("embedded site.toml unusable: {err}; using defaults");
            SiteConfig::default()
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

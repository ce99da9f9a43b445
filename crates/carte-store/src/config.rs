//! List store configuration loaded from environment variables.
//!
//! All settings have defaults so the component can run with zero
//! configuration against a local development store; real deployments
//! override them via the environment or build the struct directly.

use url::Url;

use carte_shared::constants::{DEFAULT_FALLBACK_SCAN_LIMIT, DEFAULT_LIST_NAME};

use crate::generation::GenerationStrategy;

/// List store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Absolute URL of the site hosting the card list.
    /// Env: `CARTE_SITE_URL`
    /// Default: `http://localhost:8080/sites/DigitalBusinessCard`
    pub site_url: String,

    /// Display title of the list holding one record per person.
    /// Env: `CARTE_LIST_NAME`
    /// Default: `DigitalBusinessCards`
    pub list_name: String,

    /// Cap on the full-list fetch used by the case-insensitive fallback
    /// scan. Lists larger than this may miss records with odd casing.
    /// Env: `CARTE_FALLBACK_SCAN_LIMIT`
    /// Default: `500`
    pub fallback_scan_limit: usize,

    /// How generation requests reach the external automation.
    /// Env: `CARTE_GENERATION_MODE` (`flag` or `webhook`); `webhook`
    /// additionally requires `CARTE_WEBHOOK_URL`.
    /// Default: flag-set.
    pub generation: GenerationStrategy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            site_url: "http://localhost:8080/sites/DigitalBusinessCard".to_string(),
            list_name: DEFAULT_LIST_NAME.to_string(),
            fallback_scan_limit: DEFAULT_FALLBACK_SCAN_LIMIT,
            generation: GenerationStrategy::FlagSet,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("CARTE_SITE_URL") {
            config.site_url = url;
        }

        if let Ok(name) = std::env::var("CARTE_LIST_NAME") {
            config.list_name = name;
        }

        if let Ok(val) = std::env::var("CARTE_FALLBACK_SCAN_LIMIT") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.fallback_scan_limit = n,
                _ => {
                    tracing::warn!(
                        value = %val,
                        "Invalid CARTE_FALLBACK_SCAN_LIMIT, using default"
                    );
                }
            }
        }

        if let Ok(mode) = std::env::var("CARTE_GENERATION_MODE") {
            match mode.as_str() {
                "flag" => config.generation = GenerationStrategy::FlagSet,
                "webhook" => match webhook_url_from_env() {
                    Some(url) => config.generation = GenerationStrategy::Webhook { url },
                    None => {
                        tracing::warn!(
                            "CARTE_GENERATION_MODE=webhook without a valid CARTE_WEBHOOK_URL, \
                             falling back to the flag-set variant"
                        );
                    }
                },
                other => {
                    tracing::warn!(mode = %other, "Unknown CARTE_GENERATION_MODE, using default");
                }
            }
        }

        config
    }
}

fn webhook_url_from_env() -> Option<Url> {
    let raw = std::env::var("CARTE_WEBHOOK_URL").ok()?;
    match Url::parse(&raw) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid CARTE_WEBHOOK_URL");
            None
        }
    }
}

//! Tracking configuration
//!
//! The only setting is the base domain short URLs are built on. Hosts either
//! deserialize it from their own config or read it from the environment.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

pub const BASE_DOMAIN_ENV: &str = "QRTRACK_BASE_DOMAIN";
pub const DEFAULT_BASE_DOMAIN: &str = "https://qr.example.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrackingConfig")]
pub struct TrackingConfig {
    base_domain: String,
}

#[derive(Deserialize)]
struct RawTrackingConfig {
    base_domain: String,
}

impl TryFrom<RawTrackingConfig> for TrackingConfig {
    type Error = ConfigError;

    fn try_from(raw: RawTrackingConfig) -> Result<Self, Self::Error> {
        TrackingConfig::new(&raw.base_domain)
    }
}

impl TrackingConfig {
    /// Validate and normalize a base domain. Surrounding whitespace and
    /// trailing slashes are removed.
    pub fn new(base_domain: &str) -> Result<Self, ConfigError> {
        let trimmed = base_domain.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseDomain {
            value: base_domain.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::UnexpectedComponents(base_domain.to_string()));
        }

        Ok(Self { base_domain: trimmed.to_string() })
    }

    /// Read `QRTRACK_BASE_DOMAIN`, falling back to the default domain
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(BASE_DOMAIN_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                log::debug!("Using base domain from {}: {}", BASE_DOMAIN_ENV, value);
                Self::new(&value)
            }
            _ => Self::new(DEFAULT_BASE_DOMAIN),
        }
    }

    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self { base_domain: DEFAULT_BASE_DOMAIN.to_string() }
    }
}

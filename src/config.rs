//! Runtime configuration for the assistant.
//!
//! [`BotConfig`] carries the organization constants embedded in canned
//! answers, the snapshot location, the live-fetch timeout and the tunable
//! thresholds. It is read once at startup (JSON file or defaults) and shared
//! read-only afterwards.
//!
//! # Examples
//!
//! ```
//! use sitebot::config::BotConfig;
//!
//! let config = BotConfig::default();
//! assert_eq!(config.primary_match_threshold, 0.15);
//! assert_eq!(config.simple_match_threshold, 0.30);
//! assert!(config.validate().is_ok());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::corpus::matcher::{PRIMARY_MATCH_THRESHOLD, SIMPLE_MATCH_THRESHOLD};
use crate::error::{Result, SitebotError};

/// Default live-fetch timeout in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Default cap on the TF-IDF vocabulary size.
pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// Configuration shared by every component of the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Organization name used in canned answers.
    pub organization_name: String,
    /// Base URL of the organization's website, without trailing slash.
    pub base_url: String,
    /// Public contact email address.
    pub contact_email: String,
    /// Location of the persisted corpus snapshot.
    pub snapshot_path: PathBuf,
    /// Where the generated training data is written as JSON, if anywhere.
    pub training_data_path: Option<PathBuf>,
    /// Timeout for live page fetches, in seconds.
    pub fetch_timeout_secs: u64,
    /// User agent sent with page fetches.
    pub user_agent: String,
    /// Acceptance threshold of the statistical matcher in the main pipeline.
    pub primary_match_threshold: f64,
    /// Acceptance threshold of the statistical matcher in the simplified pipeline.
    pub simple_match_threshold: f64,
    /// Maximum number of TF-IDF features kept when training.
    pub max_features: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            organization_name: "Brainovision Solutions".to_string(),
            base_url: "https://www.brainovision.in".to_string(),
            contact_email: "info@brainovision.in".to_string(),
            snapshot_path: PathBuf::from("website_training_data.bin"),
            training_data_path: Some(PathBuf::from("website_training_data.json")),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
            primary_match_threshold: PRIMARY_MATCH_THRESHOLD,
            simple_match_threshold: SIMPLE_MATCH_THRESHOLD,
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

impl BotConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BotConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(SitebotError::config("base_url must not be empty"));
        }
        if self.organization_name.trim().is_empty() {
            return Err(SitebotError::config("organization_name must not be empty"));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(SitebotError::config("fetch_timeout_secs must be positive"));
        }
        if self.max_features == 0 {
            return Err(SitebotError::config("max_features must be positive"));
        }
        for (name, value) in [
            ("primary_match_threshold", self.primary_match_threshold),
            ("simple_match_threshold", self.simple_match_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SitebotError::config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// The live-fetch timeout as a [`Duration`].
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Join a page path onto the base URL.
    pub fn page_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{}", path.trim_start_matches('/'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BotConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_page_url() {
        let config = BotConfig {
            base_url: "https://example.org/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.page_url(""), "https://example.org");
        assert_eq!(config.page_url("courses"), "https://example.org/courses");
        assert_eq!(config.page_url("/about"), "https://example.org/about");
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let config = BotConfig {
            simple_match_threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SitebotError::Config(_))));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"organization_name": "Acme Academy"}"#).unwrap();

        let config = BotConfig::load_from_file(&path).unwrap();
        assert_eq!(config.organization_name, "Acme Academy");
        assert_eq!(config.base_url, "https://www.brainovision.in");
        assert_eq!(config.primary_match_threshold, PRIMARY_MATCH_THRESHOLD);
    }
}

//! Dashboard configuration model.
//!
//! The configuration is resolved once at startup from layered sources
//! (CLI flags, environment, config file, defaults) and never changes
//! afterwards.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::DEFAULT_POLL_INTERVAL_SECS;
use crate::error::{Result, SiteboardError};
use crate::types::LogKind;

/// Partially specified configuration, as read from a single source.
///
/// Layers are merged with [`ConfigLayer::or`]; the resolved value is
/// validated by [`DashboardConfig::from_layer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    /// API base URL, e.g. `https://site.example.com`.
    pub base_url: Option<String>,
    /// Seconds between refresh cycles.
    pub poll_interval_secs: Option<u64>,
    /// Per-request transport timeout in seconds.
    pub request_timeout_secs: Option<u64>,
}

impl ConfigLayer {
    /// Reads a layer from a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SiteboardError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let layer: Self = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(layer)
    }

    /// Fills every unset field of `self` from `lower`.
    #[must_use]
    pub fn or(self, lower: Self) -> Self {
        Self {
            base_url: self.base_url.or(lower.base_url),
            poll_interval_secs: self.poll_interval_secs.or(lower.poll_interval_secs),
            request_timeout_secs: self.request_timeout_secs.or(lower.request_timeout_secs),
        }
    }
}

/// Fully resolved dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// API base URL. Always http or https.
    pub base_url: Url,
    /// Seconds between refresh cycles. Never zero.
    pub poll_interval_secs: u64,
    /// Per-request transport timeout; `None` keeps the client default.
    pub request_timeout_secs: Option<u64>,
}

impl DashboardConfig {
    /// Creates a configuration for `base_url` with default timings.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_layer(ConfigLayer {
            base_url: Some(base_url.to_owned()),
            ..ConfigLayer::default()
        })
    }

    /// Validates a merged layer into a usable configuration.
    ///
    /// # Errors
    ///
    /// Returns `SiteboardError::Config` if the base URL is missing, cannot be
    /// parsed, or is not http(s), or if the poll interval is zero.
    pub fn from_layer(layer: ConfigLayer) -> Result<Self> {
        let raw = layer
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SiteboardError::config("no API base URL configured"))?;

        let base_url = Url::parse(raw)
            .map_err(|e| SiteboardError::config(format!("invalid base URL '{raw}': {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SiteboardError::config(format!(
                "base URL must use http or https, got '{}'",
                base_url.scheme()
            )));
        }

        let poll_interval_secs = layer
            .poll_interval_secs
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
        if poll_interval_secs == 0 {
            return Err(SiteboardError::config("poll interval must be at least 1 second"));
        }

        Ok(Self {
            base_url,
            poll_interval_secs,
            request_timeout_secs: layer.request_timeout_secs.filter(|&t| t > 0),
        })
    }

    /// Base endpoint as shown to users, without a trailing slash.
    #[must_use]
    pub fn base_endpoint(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Full URL of the endpoint serving `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL does not parse.
    pub fn endpoint(&self, kind: LogKind) -> Result<Url> {
        let joined = format!("{}{}", self.base_endpoint(), kind.endpoint_path());
        Url::parse(&joined).map_err(|e| SiteboardError::config(format!("invalid endpoint '{joined}': {e}")))
    }

    /// Interval between refresh cycles.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Transport timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = DashboardConfig::new("http://localhost:5000/").expect("valid");
        let url = config.endpoint(LogKind::Hazard).expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:5000/api/hazards");
        assert_eq!(config.base_endpoint(), "http://localhost:5000");
    }

    #[test]
    fn endpoint_keeps_path_prefix() {
        let config = DashboardConfig::new("https://proxy.example.com/site-a").expect("valid");
        let url = config.endpoint(LogKind::Delivery).expect("endpoint");
        assert_eq!(url.as_str(), "https://proxy.example.com/site-a/api/deliveries");
    }

    #[test]
    fn defaults_to_fifteen_second_interval() {
        let config = DashboardConfig::new("http://localhost").expect("valid");
        assert_eq!(config.poll_interval(), Duration::from_secs(15));
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn missing_base_url_is_rejected() {
        let err = DashboardConfig::from_layer(ConfigLayer::default()).expect_err("should fail");
        assert!(err.to_string().contains("no API base URL"));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert!(DashboardConfig::new("ftp://example.com").is_err());
        assert!(DashboardConfig::new("not a url").is_err());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let layer = ConfigLayer {
            base_url: Some("http://localhost".into()),
            poll_interval_secs: Some(0),
            request_timeout_secs: None,
        };
        assert!(DashboardConfig::from_layer(layer).is_err());
    }

    #[test]
    fn higher_layer_wins() {
        let cli = ConfigLayer {
            poll_interval_secs: Some(5),
            ..ConfigLayer::default()
        };
        let file = ConfigLayer {
            base_url: Some("http://file.example".into()),
            poll_interval_secs: Some(30),
            request_timeout_secs: Some(10),
        };
        let merged = cli.or(file);
        assert_eq!(merged.base_url.as_deref(), Some("http://file.example"));
        assert_eq!(merged.poll_interval_secs, Some(5));
        assert_eq!(merged.request_timeout_secs, Some(10));
    }

    #[test]
    fn load_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"{{"base_url": "http://site.local:8080", "poll_interval_secs": 20}}"#
        )
        .expect("write");

        let layer = ConfigLayer::load(file.path()).expect("load");
        assert_eq!(layer.base_url.as_deref(), Some("http://site.local:8080"));
        assert_eq!(layer.poll_interval_secs, Some(20));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        let err = ConfigLayer::load(&path).expect_err("should fail");
        assert!(err.to_string().contains("absent.json"));
    }
}

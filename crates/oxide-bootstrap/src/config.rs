//! Site-wide defaults loaded from JSON.

use std::path::Path;

use oxide_bootstrap_core::{PaginationLabels, PaginationRequest, Size};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cdn::CdnConfig;
use crate::error::Result;

/// Default pagination settings for a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationDefaults {
    /// Maximum number of numbered links.
    pub max_visible_pages: usize,
    /// Whether to show first and last links.
    pub show_first_last: bool,
    /// Navigation labels.
    pub labels: PaginationLabels,
    /// Size of the pagination bar.
    pub size: Size,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            max_visible_pages: 5,
            show_first_last: true,
            labels: PaginationLabels::default(),
            size: Size::Default,
        }
    }
}

impl PaginationDefaults {
    /// Builds a request for the given page using these defaults.
    pub fn request(&self, current_page: usize, total_pages: usize) -> PaginationRequest {
        PaginationRequest::new(current_page, total_pages)
            .max_visible_pages(self.max_visible_pages)
            .show_first_last(self.show_first_last)
            .labels(self.labels.clone())
    }
}

/// Configuration for the helpers.
///
/// Every field is optional in the JSON source:
///
/// ```json
/// {
///   "cdn": { "css_url": "/static/bootstrap.min.css", "css_integrity": null },
///   "pagination": { "max_visible_pages": 7, "size": "small" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// CDN locations.
    pub cdn: CdnConfig,
    /// Pagination defaults.
    pub pagination: PaginationDefaults,
}

impl BootstrapConfig {
    /// Parses configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading bootstrap config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootstrapError;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = BootstrapConfig::from_json_str("{}").unwrap();
        assert_eq!(config, BootstrapConfig::default());
        assert_eq!(config.pagination.max_visible_pages, 5);
        assert!(config.cdn.css_integrity.is_some());
    }

    #[test]
    fn test_partial_config() {
        let config = BootstrapConfig::from_json_str(
            r#"{
                "cdn": { "css_url": "/static/bootstrap.min.css", "css_integrity": null },
                "pagination": { "max_visible_pages": 7, "size": "small", "labels": { "next": "Next" } }
            }"#,
        )
        .unwrap();
        assert_eq!(config.cdn.css_url, "/static/bootstrap.min.css");
        assert_eq!(config.cdn.css_integrity, None);
        assert_eq!(config.pagination.size, Size::Small);
        assert_eq!(config.pagination.labels.next, "Next");
        assert_eq!(config.pagination.labels.previous, "‹");

        let req = config.pagination.request(3, 10);
        assert_eq!(req.max_visible_pages, 7);
        assert!(req.show_first_last);
    }

    #[test]
    fn test_invalid_config() {
        let err = BootstrapConfig::from_json_str(r#"{"pagination": {"size": "huge"}}"#)
            .unwrap_err();
        assert!(matches!(err, BootstrapError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = BootstrapConfig::from_path("/nonexistent/bootstrap.json").unwrap_err();
        assert!(matches!(err, BootstrapError::Io(_)));
    }
}

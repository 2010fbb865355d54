//! Site configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Knobs for the page pipeline. Every field has a default, so a partial JSON
/// file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Relative URL of the content document.
    pub data_url: String,
    /// File name of the project detail page.
    pub project_page: String,
    /// Page-title suffix when the content does not name the owner.
    pub site_name: String,
    /// Scroll offset (px) past which the nav gets its `scrolled` class.
    pub scroll_threshold: f64,
    /// Entrance animation stagger per card, in milliseconds.
    pub stagger_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_url: "data.json".to_string(),
            project_page: "project.html".to_string(),
            site_name: "Portfolio".to_string(),
            scroll_threshold: 50.0,
            stagger_ms: 100,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid config {}: {}", path.display(), e),
            )
        })
    }

    /// CSS `animation-delay` for the card at `index`.
    pub fn stagger_delay(&self, index: usize) -> String {
        format!("{}ms", index as u64 * u64::from(self.stagger_ms))
    }
}

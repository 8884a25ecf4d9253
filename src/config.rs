//! Site configuration.
//!
//! Defaults are compiled in. A host page may override any subset by
//! embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">{"splash_delay_ms": 1500}</script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::sections::DEFAULT_ACTIVATION_OFFSET;
use crate::state::splash::{DEFAULT_SPLASH_DELAY_MS, DEFAULT_SPLASH_EXIT_MS};

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Key the theme is persisted under.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override block is not valid JSON for this shape.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but is out of range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Time the splash stays fully visible.
    pub splash_delay_ms: u64,
    /// Splash fade-out duration.
    pub splash_exit_ms: u64,
    /// Activation line distance from the viewport top, in CSS pixels.
    pub activation_offset_px: f64,
    pub theme_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            splash_exit_ms: DEFAULT_SPLASH_EXIT_MS,
            activation_offset_px: DEFAULT_ACTIVATION_OFFSET,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.splash_delay_ms == 0 {
            return Err(ConfigError::Invalid { field: "splash_delay_ms", reason: "must be positive".into() });
        }
        if !self.activation_offset_px.is_finite() || self.activation_offset_px < 0.0 {
            return Err(ConfigError::Invalid {
                field: "activation_offset_px",
                reason: format!("expected a finite non-negative number, got {}", self.activation_offset_px),
            });
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "theme_storage_key", reason: "must not be empty".into() });
        }
        Ok(())
    }
}

/// Resolve the config for this page load.
///
/// Falls back to defaults when there is no override block or it is invalid.
pub fn load() -> SiteConfig {
    let Some(raw) = embedded_override() else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("loaded site config override");
            config
        }
        Err(e) => {
            log::warn!("ignoring site config override: {e}");
            SiteConfig::default()
        }
    }
}

fn embedded_override() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

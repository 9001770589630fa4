//! Configuration management
//!
//! Settings live in `settings.json` inside the app directory:
//! ```json
//! {
//!   "api": { "baseUrl": "http://localhost:5000/api", "timeoutSecs": 30 },
//!   "display": { "currency": "USD" }
//! }
//! ```
//! Unmanaged fields written by other tools are preserved on save.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

/// Backend URL used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Request timeout used when nothing is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    api: ApiSettings,
    #[serde(default)]
    display: DisplaySettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisplaySettings {
    #[serde(default)]
    currency: Option<String>,
}

/// Tilldesk configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
    pub currency: String,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            currency: "USD".to_string(),
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the app directory
    ///
    /// The backend URL can come from, in order of precedence:
    /// 1. Environment variable TILLDESK_API_URL (for CI/testing)
    /// 2. settings.json
    /// 3. the built-in default
    pub fn load(app_dir: &Path) -> Result<Self> {
        let settings_path = app_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let base_url = std::env::var("TILLDESK_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| raw.api.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = raw.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let currency = raw
            .display
            .currency
            .clone()
            .unwrap_or_else(|| "USD".to_string());

        Ok(Self {
            base_url,
            timeout_secs,
            currency,
            _raw_settings: raw,
        })
    }

    /// Save config to the app directory
    /// Preserves settings that the CLI doesn't manage
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        let settings_path = app_dir.join("settings.json");

        // Load existing settings to preserve fields we don't manage
        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        // Update only the fields we manage
        settings.api.base_url = Some(self.base_url.clone());
        settings.api.timeout_secs = Some(self.timeout_secs);
        settings.display.currency = Some(self.currency.clone());

        std::fs::create_dir_all(app_dir)?;
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

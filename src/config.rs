//! Runtime configuration
//!
//! Layers, later ones win: built-in defaults, the API key baked in at compile
//! time (`API_KEY`), `<config_dir>/lzt-token-checker/config.json`, then `.env`
//! and the process environment.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::errors::{AppError, AppResult};

pub const DEFAULT_MARKET_BASE_URL: &str = "https://api.lzt.market";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_DIR_NAME: &str = "lzt-token-checker";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub market_base_url: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub gemini_api_key: Option<String>,
    pub request_timeout_secs: u64,
}

/// Subset of fields accepted in `config.json`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    market_base_url: Option<String>,
    gemini_base_url: Option<String>,
    gemini_model: Option<String>,
    gemini_api_key: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            market_base_url: DEFAULT_MARKET_BASE_URL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_key: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Resolve the full configuration. Never fails: broken layers are logged and skipped.
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("[Config] No .env loaded: {}", e);
        }

        let mut config = Self::default();
        config.apply_build_env(option_env!("API_KEY"));

        if let Some(path) = config_file_path() {
            if path.exists() {
                match read_file_config(&path) {
                    Ok(file) => {
                        log::info!("[Config] Loaded {}", path.display());
                        config.apply_file(file);
                    }
                    Err(e) => log::warn!("[Config] Ignoring {}: {}", path.display(), e),
                }
            }
        }

        config.apply_env(|key| std::env::var(key).ok());

        log::info!(
            "[Config] market={} model={} api_key={}",
            config.market_base_url,
            config.gemini_model,
            if config.gemini_api_key.is_some() { "set" } else { "missing" }
        );
        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    fn apply_build_env(&mut self, baked_key: Option<&str>) {
        if let Some(key) = non_empty(baked_key) {
            self.gemini_api_key = Some(key);
        }
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(url) = non_empty(file.market_base_url.as_deref()) {
            self.market_base_url = trim_base_url(&url);
        }
        if let Some(url) = non_empty(file.gemini_base_url.as_deref()) {
            self.gemini_base_url = trim_base_url(&url);
        }
        if let Some(model) = non_empty(file.gemini_model.as_deref()) {
            self.gemini_model = model;
        }
        if let Some(key) = non_empty(file.gemini_api_key.as_deref()) {
            self.gemini_api_key = Some(key);
        }
        if let Some(secs) = file.request_timeout_secs.filter(|s| *s > 0) {
            self.request_timeout_secs = secs;
        }
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = non_empty(lookup("LZT_API_BASE_URL").as_deref()) {
            self.market_base_url = trim_base_url(&url);
        }
        if let Some(url) = non_empty(lookup("GEMINI_BASE_URL").as_deref()) {
            self.gemini_base_url = trim_base_url(&url);
        }
        if let Some(model) = non_empty(lookup("GEMINI_MODEL").as_deref()) {
            self.gemini_model = model;
        }
        let key = lookup("API_KEY").or_else(|| lookup("GEMINI_API_KEY"));
        if let Some(key) = non_empty(key.as_deref()) {
            self.gemini_api_key = Some(key);
        }
        if let Some(raw) = lookup("LZT_REQUEST_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout_secs = secs,
                _ => log::warn!(
                    "[Config] Ignoring LZT_REQUEST_TIMEOUT_SECS={:?}, keeping {}s",
                    raw,
                    self.request_timeout_secs
                ),
            }
        }
    }
}

pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn read_file_config(path: &Path) -> AppResult<FileConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| AppError::Config(e.to_string()))?;
    serde_json::from_str(&raw).map_err(|e| AppError::Config(e.to_string()))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.market_base_url, "https://api.lzt.market");
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert!(!config.has_api_key());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = AppConfig::default();
        config.apply_file(FileConfig {
            gemini_model: Some("file-model".to_string()),
            gemini_api_key: Some("file-key".to_string()),
            ..Default::default()
        });
        config.apply_env(env(&[("GEMINI_MODEL", "env-model")]));
        assert_eq!(config.gemini_model, "env-model");
        assert_eq!(config.gemini_api_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn test_api_key_takes_precedence_over_gemini_api_key() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[("API_KEY", "primary"), ("GEMINI_API_KEY", "secondary")]));
        assert_eq!(config.gemini_api_key.as_deref(), Some("primary"));

        let mut config = AppConfig::default();
        config.apply_env(env(&[("GEMINI_API_KEY", "secondary")]));
        assert_eq!(config.gemini_api_key.as_deref(), Some("secondary"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_build_env(Some("   "));
        config.apply_env(env(&[("API_KEY", ""), ("LZT_API_BASE_URL", " ")]));
        assert!(!config.has_api_key());
        assert_eq!(config.market_base_url, DEFAULT_MARKET_BASE_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[("LZT_API_BASE_URL", "http://localhost:8080/")]));
        assert_eq!(config.market_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_bad_timeout_keeps_previous() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[("LZT_REQUEST_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);

        config.apply_env(env(&[("LZT_REQUEST_TIMEOUT_SECS", "0")]));
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);

        config.apply_env(env(&[("LZT_REQUEST_TIMEOUT_SECS", "5")]));
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_file_config_parses_partial_json() {
        let file: FileConfig = serde_json::from_str(r#"{"gemini_model":"gemini-2.0-flash"}"#).unwrap();
        let mut config = AppConfig::default();
        config.apply_file(file);
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.market_base_url, DEFAULT_MARKET_BASE_URL);
    }
}

//! Frontend Configuration
//!
//! Values baked in at build time through environment variables
//! (`HARVEST_API_BASE=https://... trunk build`).

use log::LevelFilter;

const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_PAGE_SIZE: usize = 20;
const DEFAULT_TOKEN_KEY: &str = "harvest.token";
const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4000;

/// Page sizes offered by the items-per-page selector
pub const PAGE_SIZE_OPTIONS: &[usize] = &[10, 20, 50, 100];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every API path is appended to (no trailing slash)
    pub api_base_url: String,
    pub default_page_size: usize,
    /// localStorage key holding the bearer token
    pub token_storage_key: String,
    pub toast_timeout_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            token_storage_key: DEFAULT_TOKEN_KEY.to_string(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from compile-time environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("HARVEST_API_BASE"),
            option_env!("HARVEST_PAGE_SIZE"),
            option_env!("HARVEST_TOKEN_KEY"),
            option_env!("HARVEST_LOG_LEVEL"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        page_size: Option<&str>,
        token_key: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .filter(|base| !base.is_empty())
                .unwrap_or(defaults.api_base_url),
            default_page_size: page_size
                .and_then(|size| size.trim().parse::<usize>().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.default_page_size),
            token_storage_key: token_key
                .filter(|key| !key.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.token_storage_key),
            toast_timeout_ms: defaults.toast_timeout_ms,
            log_level: log_level
                .map(console_logger::parse_level)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Join the base URL with an API path (`/products/3`)
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_missing() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_page_size, 20);
    }

    #[test]
    fn test_overrides_are_normalised() {
        let config = AppConfig::from_values(
            Some("https://market.example.com/api/"),
            Some(" 50 "),
            Some("session"),
            Some("debug"),
        );
        assert_eq!(config.api_base_url, "https://market.example.com/api");
        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.token_storage_key, "session");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_page_size_falls_back() {
        let zero = AppConfig::from_values(None, Some("0"), None, None);
        let junk = AppConfig::from_values(None, Some("many"), None, None);
        assert_eq!(zero.default_page_size, 20);
        assert_eq!(junk.default_page_size, 20);
    }

    #[test]
    fn test_url_for_joins_single_slash() {
        let config = AppConfig::default();
        assert_eq!(config.url_for("/products/3"), "/api/products/3");
        assert_eq!(config.url_for("farms"), "/api/farms");
    }
}

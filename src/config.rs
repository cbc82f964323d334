use std::path::PathBuf;
use tracing::{info, warn};

const DEFAULT_API_URL: &str = "http://localhost:8888/";
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Application configuration
/// In debug builds: loads from .env file first, then the environment
/// In release builds: environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the booking REST API, always ending with '/'
    pub api_base_url: String,
    /// Results per page for the hotel search
    pub page_size: u32,
    /// Directory holding the stored user profile
    pub config_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            config_dir: default_config_dir(),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                info!("No .env file found, using environment only");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("HOTELHUB_API_URL")
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let page_size = match std::env::var("HOTELHUB_PAGE_SIZE") {
            Ok(value) => match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    warn!("Invalid HOTELHUB_PAGE_SIZE '{}', using {}", value, DEFAULT_PAGE_SIZE);
                    DEFAULT_PAGE_SIZE
                }
            },
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let config_dir = std::env::var("HOTELHUB_CONFIG_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(default_config_dir);

        info!("API base URL: {}", api_base_url);

        Self {
            api_base_url,
            page_size,
            config_dir,
        }
    }

    /// Path of the JSON file holding the logged-in user's profile
    pub fn user_file(&self) -> PathBuf {
        self.config_dir.join("user.json")
    }
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hotelhub")
}

/// Relative endpoint paths are appended to the base URL, so it must end with '/'
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// Hook to read the configuration from any component
pub fn use_config() -> Config {
    let context = dioxus::prelude::use_context::<crate::AppContext>();
    context.config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://api:8888"), "http://api:8888/");
        assert_eq!(normalize_base_url("http://api:8888/ "), "http://api:8888/");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:8888/");
        assert_eq!(config.page_size, 10);
        assert!(config.user_file().ends_with("user.json"));
    }
}

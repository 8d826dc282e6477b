use crate::constants::*;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub notice_duration: Duration,
    pub default_max_minutes_per_day: u64,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBaseUrl(String),
    InvalidNoticeDuration(String),
    InvalidMaxMinutes(String),
    EnvFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl(url) => {
                write!(f, "Invalid base url (expected http:// or https://): {}", url)
            }
            ConfigError::InvalidNoticeDuration(value) => {
                write!(f, "Invalid notice duration in milliseconds: {}", value)
            }
            ConfigError::InvalidMaxMinutes(value) => {
                write!(f, "Invalid default max minutes per day: {}", value)
            }
            ConfigError::EnvFile(msg) => {
                write!(f, "Failed to read env file: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            notice_duration: Duration::from_millis(DEFAULT_NOTICE_DURATION_MS),
            default_max_minutes_per_day: DEFAULT_MAX_MINUTES_PER_DAY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Reads a dotenv file without touching the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let iter =
            dotenv::from_path_iter(path.as_ref()).map_err(|e| ConfigError::EnvFile(e.to_string()))?;

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::EnvFile(e.to_string()))?;
            vars.insert(key, value);
        }

        Self::from_vars(|key| vars.get(key).cloned())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("TRACKER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let notice_ms = lookup("NOTICE_DURATION_MS")
            .unwrap_or_else(|| DEFAULT_NOTICE_DURATION_MS.to_string());
        let max_minutes = lookup("DEFAULT_MAX_MINUTES_PER_DAY")
            .unwrap_or_else(|| DEFAULT_MAX_MINUTES_PER_DAY.to_string());
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        let notice_ms = notice_ms
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNoticeDuration(notice_ms.clone()))?;

        let default_max_minutes_per_day = max_minutes
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidMaxMinutes(max_minutes.clone()))?;

        Ok(ClientConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            notice_duration: Duration::from_millis(notice_ms),
            default_max_minutes_per_day,
            log_filter,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

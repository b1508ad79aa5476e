use std::env;

use crate::utils::pagination::{
    default_info_format, default_limit, default_next_label, default_pager_function,
    default_prev_label,
};
use crate::utils::{DateFormat, DateFormatError, PagerConfig};

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub pager: PagerConfig,
    pub date_format: DateFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Missing keys fall back
    /// to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let limit = match lookup("PAGER_LIMIT") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(limit) if limit > 0 => limit,
                _ => return Err(ConfigError::InvalidLimit(raw)),
            },
            None => default_limit(),
        };

        let date_format = match lookup("DATE_FORMAT") {
            Some(pattern) => DateFormat::new(&pattern)?,
            None => DateFormat::default(),
        };

        Ok(Config {
            pager: PagerConfig {
                prev_label: lookup("PAGER_PREV_LABEL").unwrap_or_else(default_prev_label),
                next_label: lookup("PAGER_NEXT_LABEL").unwrap_or_else(default_next_label),
                limit,
                info_format: lookup("PAGER_INFO_FORMAT").unwrap_or_else(default_info_format),
                pager_function: lookup("PAGER_FUNCTION").unwrap_or_else(default_pager_function),
            },
            date_format,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PAGER_LIMIT must be a positive integer, got {0:?}")]
    InvalidLimit(String),
    #[error("Invalid DATE_FORMAT: {0}")]
    InvalidDateFormat(#[from] DateFormatError),
}

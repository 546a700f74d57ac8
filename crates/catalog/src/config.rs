//! Catalog configuration, read from the process environment.

use thiserror::Error;

use crate::search::SearchMode;

/// Environment variable selecting the search mode.
pub const SEARCH_MODE_ENV: &str = "LIBRIS_SEARCH_MODE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub search_mode: SearchMode,
}

impl CatalogConfig {
    /// Load from the environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let search_mode = match lookup(SEARCH_MODE_ENV) {
            None => SearchMode::default(),
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: SEARCH_MODE_ENV,
                value: raw,
            })?,
        };

        Ok(Self { search_mode })
    }

    pub fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
        self.search_mode = search_mode;
        self
    }
}

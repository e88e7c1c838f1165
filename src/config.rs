use chrono::{Datelike, Local};

use crate::error::ConfigError;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Startup configuration, built once in `main` and shared through context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub rows_per_page_options: Vec<usize>,
    pub default_rows_per_page: usize,
    /// How many years before and after the current one the year selectors offer.
    pub year_span: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            rows_per_page_options: vec![5, 10, 25],
            default_rows_per_page: 10,
            year_span: 2,
        }
    }
}

impl AppConfig {
    /// Reads `NEIGHBORHOOD_API_URL` at compile time, falling back to the local backend.
    pub fn from_env() -> Self {
        let raw = option_env!("NEIGHBORHOOD_API_URL").unwrap_or(DEFAULT_API_BASE_URL);
        match Self::with_base_url(raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(error = %err, "invalid API base URL, using default");
                Self::default()
            }
        }
    }

    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
        }
        Ok(Self {
            api_base_url: trimmed.to_string(),
            ..Self::default()
        })
    }

    pub fn year_options(&self) -> Vec<i32> {
        year_options_around(Local::now().year(), self.year_span)
    }
}

pub fn year_options_around(year: i32, span: i32) -> Vec<i32> {
    (year - span..=year + span).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let config = AppConfig::with_base_url("https://rt.example.org/").unwrap();
        assert_eq!(config.api_base_url, "https://rt.example.org");
        assert_eq!(config.default_rows_per_page, 10);
    }

    #[test]
    fn base_url_requires_http_scheme() {
        assert_eq!(
            AppConfig::with_base_url("localhost:8000"),
            Err(ConfigError::InvalidBaseUrl("localhost:8000".to_string()))
        );
    }

    #[test]
    fn year_options_span_both_sides() {
        assert_eq!(year_options_around(2024, 2), vec![2022, 2023, 2024, 2025, 2026]);
    }
}

use std::time::Duration;

use normai_core::error::AppError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:80";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Where the query service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, AppError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        let host = base_url
            .strip_prefix("http://")
            .or_else(|| base_url.strip_prefix("https://"))
            .ok_or_else(|| {
                AppError::new("CONFIG_INVALID", "Base URL must start with http:// or https://")
                    .with_details(format!("base_url={base_url}"))
            })?;
        if host.is_empty() || host.starts_with('/') {
            return Err(AppError::new("CONFIG_INVALID", "Base URL is missing a host")
                .with_details(format!("base_url={base_url}")));
        }
        if timeout_ms == 0 {
            return Err(AppError::new("CONFIG_INVALID", "Timeout must be greater than zero"));
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured failure shared by the query client and the `normai` binary.
///
/// `message` is what a user sees; `code` is stable and one of:
/// - `QUERY_EMPTY`: blank question, rejected before any request
/// - `QUERY_FAILED`: the service answered with a non-2xx status
/// - `QUERY_UNREACHABLE`: transport failure (always `retryable`)
/// - `QUERY_RESPONSE_INVALID`: a body that could not be read or decoded
/// - `CONFIG_INVALID`: bad base URL or timeout
/// - `OUTPUT_FAILED`: the binary could not encode its JSON output
///
/// The annotation pipeline itself never produces one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One supporting excerpt returned alongside an answer.
///
/// `source` is a human-readable label (e.g. a law section title). `text` is the raw excerpt and may
/// still carry echoed self-references such as `Source 2:`; see
/// [`normalize_citation_text`](crate::normalize::citation_text::normalize_citation_text).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    pub source: String,
    pub text: String,
}

/// Body of a `GET /query` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryOutput {
    pub query: String,
    pub response: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

impl QueryOutput {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|e| {
            AppError::new("QUERY_RESPONSE_INVALID", "Failed to decode query response")
                .with_details(e.to_string())
        })
    }
}

/// A trimmed, non-empty question ready to be sent to the query service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    query: String,
}

impl QueryRequest {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let query = raw.trim();
        if query.is_empty() {
            return Err(AppError::new("QUERY_EMPTY", "Query string cannot be empty"));
        }
        Ok(Self {
            query: query.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }
}

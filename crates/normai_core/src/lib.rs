pub mod annotate;
pub mod domain;
pub mod error;
pub mod markers;
pub mod normalize;

#[cfg(test)]
mod tests {
    use super::domain::QueryRequest;
    use super::error::AppError;

    #[test]
    fn app_error_is_structured() {
        let err = AppError::new("QUERY_FAILED", "Failed to fetch").with_retryable(true);
        assert_eq!(err.code, "QUERY_FAILED");
        assert_eq!(err.message, "Failed to fetch");
        assert!(err.retryable);
        assert_eq!(err.to_string(), "[QUERY_FAILED] Failed to fetch");
    }

    #[test]
    fn query_request_rejects_blank_input() {
        assert_eq!(QueryRequest::new("   ").unwrap_err().code, "QUERY_EMPTY");
        assert_eq!(QueryRequest::new("").unwrap_err().code, "QUERY_EMPTY");
        assert_eq!(
            QueryRequest::new("  what happens if I steal?\n").unwrap().as_str(),
            "what happens if I steal?"
        );
    }
}

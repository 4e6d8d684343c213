use normai_core::annotate::{annotate, AnnotatedAnswer};
use normai_core::domain::{QueryOutput, QueryRequest};
use normai_core::error::AppError;

pub mod http;

/// Anything that can answer a question with a response and its citations.
pub trait QueryService {
    fn query(&self, req: &QueryRequest) -> Result<QueryOutput, AppError>;
}

/// Validate the question, ask the service, and prepare the result for display.
pub fn ask(service: &dyn QueryService, raw_query: &str) -> Result<AnnotatedAnswer, AppError> {
    let req = QueryRequest::new(raw_query)?;
    let output = service.query(&req)?;
    Ok(annotate(&output))
}

use thiserror::Error;

/// Every way the external explanation path can fail.
///
/// None of these reach the HTTP caller; each one degrades to the fallback
/// explanation with its `Display` text recorded as the `reason`.
#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("credential missing: OPENAI_API_KEY is not set")]
    MissingCredential,

    #[error("openai client is not available in this build")]
    ClientUnavailable,

    #[error("OpenAI call failed: {0}")]
    Invocation(String),

    #[error("empty response")]
    EmptyResponse,

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

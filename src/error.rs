use async_openai::error::OpenAIError;

/// Error taxonomy for the greeter. Every variant is fatal: the binary prints
/// the message and exits non-zero, nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum GreeterError {
    /// The credential variable is absent or empty. Raised before any network
    /// activity.
    #[error("OPENAI_API_KEY not found in .env file! Check .env file.")]
    MissingCredential,

    /// The chat completion call failed (transport, authentication, quota).
    #[error("OpenAI request failed: {0}")]
    Api(#[from] OpenAIError),

    /// The call succeeded but the response lacks the expected structure.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

// Configuration loading
mod config;
pub use config::{CREDENTIAL_VAR, credential_from, load_credential};

// Error taxonomy
mod error;
pub use error::GreeterError;

// OpenAI chat call
mod openai;
pub use openai::{GREETING_MODEL, GREETING_PROMPT, extract_reply, greeting_request, send_greeting};

// Credential redaction
mod utils;
pub use utils::redact_credential;

use std::env;

use dotenvy::dotenv;

use crate::error::GreeterError;

/// Name of the environment variable holding the API credential.
pub const CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

/// Load the API credential from the process environment, populating it from a
/// local `.env` file first if one exists.
///
/// A missing `.env` file is fine; a missing or empty credential is not.
pub fn load_credential() -> Result<String, GreeterError> {
    // Load `.env` file
    dotenv().ok();

    credential_from(env::var(CREDENTIAL_VAR).ok())
}

/// Validate a credential value read from the environment.
///
/// Split out from `load_credential` so tests can inject values without
/// touching the process environment. Absent and empty are both rejected; the
/// caller decides to abort.
pub fn credential_from(value: Option<String>) -> Result<String, GreeterError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(GreeterError::MissingCredential),
    }
}

//! Error types for the token exchange Lambda.

use thiserror::Error;

use crate::provider::ProviderError;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving a token exchange.
#[derive(Error, Debug)]
pub enum Error {
    /// Request body absent or not a JSON object
    #[error("Invalid JSON format")]
    InvalidJson,

    /// Username or password absent or empty
    #[error("Username and password are required")]
    MissingCredentials,

    /// Identity provider rejected or failed the exchange
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// AWS SDK error
    #[error("AWS error: {0}")]
    Aws(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidJson | Error::MissingCredentials => 400,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(Error::InvalidJson.status_code(), 400);
        assert_eq!(Error::MissingCredentials.status_code(), 400);
        assert_eq!(Error::InvalidJson.to_string(), "Invalid JSON format");
        assert_eq!(
            Error::MissingCredentials.to_string(),
            "Username and password are required"
        );
    }

    #[test]
    fn test_provider_errors_map_to_500() {
        let err = Error::from(ProviderError::MissingField("IdToken"));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Authentication result is missing IdToken");
    }
}

//! Identity provider abstraction used by the token handler.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Authentication flow requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    /// Server-side username/password authentication (`ADMIN_USER_PASSWORD_AUTH`)
    AdminUserPassword,
}

impl AuthFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthFlow::AdminUserPassword => "ADMIN_USER_PASSWORD_AUTH",
        }
    }
}

/// A single administrative authentication call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAuthRequest {
    pub user_pool_id: String,
    pub client_id: String,
    pub auth_flow: AuthFlow,
    /// `USERNAME`, `PASSWORD` and `SECRET_HASH`
    pub auth_parameters: HashMap<String, String>,
}

/// Tokens issued by the provider on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: i32,
    pub token_type: String,
}

/// Failures surfaced by the identity provider call.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Service, credential, throttling or transport failure
    #[error("{0}")]
    Service(String),

    /// Provider answered with a challenge instead of tokens
    #[error("Authentication requires challenge {0}")]
    ChallengeRequired(String),

    /// Provider answered without a required token field
    #[error("Authentication result is missing {0}")]
    MissingField(&'static str),
}

/// An identity provider able to run an administrative password authentication.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn admin_initiate_auth(
        &self,
        request: AdminAuthRequest,
    ) -> Result<AuthTokens, ProviderError>;
}

//! Amazon Cognito user pool client.

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::error::DisplayErrorContext;
use aws_sdk_cognitoidentityprovider::operation::admin_initiate_auth::AdminInitiateAuthOutput;
use aws_sdk_cognitoidentityprovider::types::{AuthFlowType, AuthenticationResultType};
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use tracing::debug;

use crate::provider::{AdminAuthRequest, AuthFlow, AuthTokens, IdentityProvider, ProviderError};

/// Identity provider backed by `cognito-idp:AdminInitiateAuth`.
pub struct CognitoProvider {
    client: CognitoClient,
}

impl CognitoProvider {
    /// Create a new Cognito provider.
    pub fn new(client: CognitoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityProvider for CognitoProvider {
    async fn admin_initiate_auth(
        &self,
        request: AdminAuthRequest,
    ) -> Result<AuthTokens, ProviderError> {
        debug!(
            "Calling AdminInitiateAuth on pool {} with flow {}",
            request.user_pool_id,
            request.auth_flow.as_str()
        );

        let output = self
            .client
            .admin_initiate_auth()
            .user_pool_id(request.user_pool_id)
            .client_id(request.client_id)
            .auth_flow(auth_flow_type(request.auth_flow))
            .set_auth_parameters(Some(request.auth_parameters))
            .send()
            .await
            .map_err(|e| ProviderError::Service(DisplayErrorContext(&e).to_string()))?;

        tokens_from_output(&output)
    }
}

fn auth_flow_type(flow: AuthFlow) -> AuthFlowType {
    match flow {
        AuthFlow::AdminUserPassword => AuthFlowType::AdminUserPasswordAuth,
    }
}

fn tokens_from_output(output: &AdminInitiateAuthOutput) -> Result<AuthTokens, ProviderError> {
    match output.authentication_result() {
        Some(result) => tokens_from_result(result),
        None => Err(ProviderError::ChallengeRequired(
            output
                .challenge_name()
                .map(|challenge| challenge.as_str().to_string())
                .unwrap_or_else(|| "UNKNOWN".to_string()),
        )),
    }
}

fn tokens_from_result(result: &AuthenticationResultType) -> Result<AuthTokens, ProviderError> {
    fn field(value: Option<&str>, name: &'static str) -> Result<String, ProviderError> {
        value
            .map(str::to_string)
            .ok_or(ProviderError::MissingField(name))
    }

    Ok(AuthTokens {
        access_token: field(result.access_token(), "AccessToken")?,
        id_token: field(result.id_token(), "IdToken")?,
        refresh_token: field(result.refresh_token(), "RefreshToken")?,
        expires_in: result.expires_in(),
        token_type: field(result.token_type(), "TokenType")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_cognitoidentityprovider::types::ChallengeNameType;

    fn full_result() -> AuthenticationResultType {
        AuthenticationResultType::builder()
            .access_token("access-123")
            .id_token("id-456")
            .refresh_token("refresh-789")
            .expires_in(3600)
            .token_type("Bearer")
            .build()
    }

    #[test]
    fn test_flow_maps_to_sdk_enum() {
        assert_eq!(
            auth_flow_type(AuthFlow::AdminUserPassword),
            AuthFlowType::AdminUserPasswordAuth
        );
        assert_eq!(
            auth_flow_type(AuthFlow::AdminUserPassword).as_str(),
            AuthFlow::AdminUserPassword.as_str()
        );
    }

    #[test]
    fn test_tokens_copied_verbatim() {
        let output = AdminInitiateAuthOutput::builder()
            .authentication_result(full_result())
            .build();

        let tokens = tokens_from_output(&output).unwrap();
        assert_eq!(
            tokens,
            AuthTokens {
                access_token: "access-123".to_string(),
                id_token: "id-456".to_string(),
                refresh_token: "refresh-789".to_string(),
                expires_in: 3600,
                token_type: "Bearer".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let result = AuthenticationResultType::builder()
            .access_token("access-123")
            .id_token("id-456")
            .expires_in(3600)
            .token_type("Bearer")
            .build();

        let err = tokens_from_result(&result).unwrap_err();
        assert!(matches!(err, ProviderError::MissingField("RefreshToken")));
    }

    #[test]
    fn test_challenge_instead_of_tokens() {
        let output = AdminInitiateAuthOutput::builder()
            .challenge_name(ChallengeNameType::NewPasswordRequired)
            .session("session-token")
            .build();

        let err = tokens_from_output(&output).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Authentication requires challenge NEW_PASSWORD_REQUIRED"
        );
    }
}

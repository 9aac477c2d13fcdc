//! Username/password token exchange.
//!
//! Parses the request body, computes the Cognito `SECRET_HASH`, calls
//! `AdminInitiateAuth` once and maps the outcome to a response envelope.
//! Client mistakes are answered with 400 before any provider call is made;
//! provider failures become 500 and carry the provider's error text.

use lambda_http::{Body, Request, Response};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::http::{body_bytes, ResponseEnvelope};
use crate::models::AuthRequest;
use crate::provider::{AdminAuthRequest, AuthFlow, AuthTokens, IdentityProvider};
use crate::secret_hash::compute_secret_hash;
use crate::{Config, Result};

/// Handler state shared across invocations.
pub struct AuthHandler<P> {
    config: Arc<Config>,
    provider: P,
}

impl<P: IdentityProvider> AuthHandler<P> {
    pub fn new(config: Arc<Config>, provider: P) -> Self {
        Self { config, provider }
    }

    /// Serve one API Gateway request.
    pub async fn handle_request(
        &self,
        event: Request,
    ) -> std::result::Result<Response<Body>, lambda_http::Error> {
        self.handle(body_bytes(event.body())).await.into_response()
    }

    /// Run the exchange for a raw request body.
    pub async fn handle(&self, body: Option<&[u8]>) -> ResponseEnvelope {
        let request = match AuthRequest::parse(body) {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejected token request: {}", e);
                return ResponseEnvelope::message(e.status_code(), e.to_string());
            }
        };

        match self.exchange(&request).await {
            Ok(tokens) => ResponseEnvelope::new(
                200,
                json!({
                    "access_token": tokens.access_token,
                    "id_token": tokens.id_token,
                    "refresh_token": tokens.refresh_token,
                    "expires_in": tokens.expires_in,
                    "token_type": tokens.token_type,
                }),
            ),
            Err(e) => {
                error!("Failed to authenticate with Cognito: {}", e);
                ResponseEnvelope::internal_error(e.to_string())
            }
        }
    }

    async fn exchange(&self, request: &AuthRequest) -> Result<AuthTokens> {
        let secret_hash = compute_secret_hash(
            &self.config.client_secret,
            &request.username,
            &self.config.client_id,
        );

        let auth_parameters = HashMap::from([
            ("USERNAME".to_string(), request.username.clone()),
            ("PASSWORD".to_string(), request.password.clone()),
            ("SECRET_HASH".to_string(), secret_hash),
        ]);

        info!("Authenticating user {}", request.username);

        let tokens = self
            .provider
            .admin_initiate_auth(AdminAuthRequest {
                user_pool_id: self.config.user_pool_id.clone(),
                client_id: self.config.client_id.clone(),
                auth_flow: AuthFlow::AdminUserPassword,
                auth_parameters,
            })
            .await?;

        Ok(tokens)
    }
}

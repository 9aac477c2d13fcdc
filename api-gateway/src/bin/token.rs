//! Token Lambda - Handles /v1/auth/token endpoint.
//!
//! Exchanges a username and password for Cognito tokens using the
//! `ADMIN_USER_PASSWORD_AUTH` flow on behalf of an app client with a secret.

use aws_config::BehaviorVersion;
use aws_sdk_cognitoidentityprovider::config::Region;
use lambda_http::{run, service_fn, Error, Request};
use shared::{AuthHandler, CognitoProvider, Config};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

async fn build_handler() -> Result<AuthHandler<CognitoProvider>, Error> {
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let secrets_client = aws_sdk_secretsmanager::Client::new(&sdk_config);

    let config = Config::from_env_with_secrets(&secrets_client).await?;

    let cognito_config = aws_sdk_cognitoidentityprovider::config::Builder::from(&sdk_config)
        .region(Region::new(config.aws_region.clone()))
        .build();
    let cognito_client = aws_sdk_cognitoidentityprovider::Client::from_conf(cognito_config);

    info!(
        "Token endpoint ready for pool {} in {}",
        config.user_pool_id, config.aws_region
    );

    Ok(AuthHandler::new(
        Arc::new(config),
        CognitoProvider::new(cognito_client),
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let handler = Arc::new(build_handler().await?);

    run(service_fn(move |event: Request| {
        let handler = Arc::clone(&handler);
        async move { handler.handle_request(event).await }
    }))
    .await
}

//! Configuration management for the token exchange Lambda.

use aws_sdk_secretsmanager::Client as SecretsClient;
use std::env;
use std::fmt;

use crate::secrets::get_client_secret;
use crate::{Error, Result};

const CLIENT_ID: &str = "COGNITO_CLIENT_ID";
const CLIENT_SECRET: &str = "COGNITO_CLIENT_SECRET";
const CLIENT_SECRET_ARN: &str = "COGNITO_CLIENT_SECRET_ARN";
const USER_POOL_ID: &str = "COGNITO_USER_POOL_ID";
const AWS_REGION: &str = "AWS_REGION";

/// Cognito app client settings, loaded once per cold start.
#[derive(Clone)]
pub struct Config {
    /// App client id
    pub client_id: String,
    /// App client secret
    pub client_secret: String,
    /// User pool id
    pub user_pool_id: String,
    /// AWS region
    pub aws_region: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from environment variables, resolving the client
    /// secret from Secrets Manager when only `COGNITO_CLIENT_SECRET_ARN` is set.
    pub async fn from_env_with_secrets(client: &SecretsClient) -> Result<Self> {
        let inline = env::var(CLIENT_SECRET).ok().filter(|v| !v.is_empty());
        let arn = env::var(CLIENT_SECRET_ARN).ok().filter(|v| !v.is_empty());

        match (inline, arn) {
            (None, Some(arn)) => {
                let secret = get_client_secret(client, &arn).await?;
                Self::from_lookup(|key| match key {
                    CLIENT_SECRET => Some(secret.clone()),
                    _ => env::var(key).ok(),
                })
            }
            _ => Self::from_env(),
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::Config(format!("{} not set", key)))
        };

        Ok(Self {
            client_id: required(CLIENT_ID)?,
            client_secret: required(CLIENT_SECRET)?,
            user_pool_id: required(USER_POOL_ID)?,
            aws_region: lookup(AWS_REGION).unwrap_or_else(|| "us-east-1".to_string()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("user_pool_id", &self.user_pool_id)
            .field("aws_region", &self.aws_region)
            .finish()
    }
}

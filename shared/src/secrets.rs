//! AWS Secrets Manager integration.

use aws_sdk_secretsmanager::Client as SecretsClient;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use tokio::sync::RwLock;

use crate::{Error, Result};

/// Cached secrets with lazy initialization.
static SECRETS_CACHE: OnceLock<RwLock<HashMap<String, String>>> = OnceLock::new();

fn get_cache() -> &'static RwLock<HashMap<String, String>> {
    SECRETS_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// App client secret stored as a JSON document.
#[derive(Debug, Deserialize)]
struct ClientSecretDocument {
    client_secret: String,
}

/// Get a secret value from Secrets Manager with caching.
pub async fn get_secret(client: &SecretsClient, secret_arn: &str) -> Result<String> {
    // Check cache first
    {
        let cache = get_cache().read().await;
        if let Some(value) = cache.get(secret_arn) {
            return Ok(value.clone());
        }
    }

    let response = client
        .get_secret_value()
        .secret_id(secret_arn)
        .send()
        .await
        .map_err(|e| Error::Aws(format!("Failed to get secret: {}", e)))?;

    let secret_string = response
        .secret_string()
        .ok_or_else(|| Error::Aws("Secret has no string value".to_string()))?
        .to_string();

    {
        let mut cache = get_cache().write().await;
        cache.insert(secret_arn.to_string(), secret_string.clone());
    }

    Ok(secret_string)
}

/// Get the Cognito app client secret from Secrets Manager.
pub async fn get_client_secret(client: &SecretsClient, secret_arn: &str) -> Result<String> {
    let secret_string = get_secret(client, secret_arn).await?;
    parse_client_secret(&secret_string)
}

/// Accepts either the raw secret or `{"client_secret": "..."}`.
fn parse_client_secret(secret_string: &str) -> Result<String> {
    let trimmed = secret_string.trim();

    if trimmed.starts_with('{') {
        let document: ClientSecretDocument = serde_json::from_str(trimmed)
            .map_err(|e| Error::Aws(format!("Failed to parse client secret: {}", e)))?;
        return Ok(document.client_secret);
    }

    if trimmed.is_empty() {
        return Err(Error::Aws("Client secret is empty".to_string()));
    }

    Ok(trimmed.to_string())
}

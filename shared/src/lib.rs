//! Shared library for the Cognito token exchange Lambda.
//!
//! This crate provides the request handler, the Cognito client and the supporting
//! configuration, error and HTTP types used by the Lambda binary.

pub mod cognito;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod models;
pub mod provider;
pub mod secret_hash;
pub mod secrets;

pub use cognito::CognitoProvider;
pub use config::Config;
pub use error::{Error, Result};
pub use handler::AuthHandler;
pub use http::ResponseEnvelope;
pub use models::AuthRequest;
pub use provider::{AdminAuthRequest, AuthFlow, AuthTokens, IdentityProvider, ProviderError};
pub use secret_hash::compute_secret_hash;
pub use secrets::{get_client_secret, get_secret};

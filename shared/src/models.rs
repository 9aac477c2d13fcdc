//! Request models for the token endpoint.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::{Error, Result};

/// Body as sent by the client; both members may be absent.
#[derive(Debug, Deserialize)]
struct RawAuthRequest {
    username: Option<String>,
    password: Option<String>,
}

/// Validated username/password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

impl AuthRequest {
    /// Parse and validate a raw request body.
    ///
    /// Fails with [`Error::InvalidJson`] when the body is absent or is not a JSON
    /// object with string (or null) `username`/`password` members, and with
    /// [`Error::MissingCredentials`] when either value is absent or empty.
    pub fn parse(body: Option<&[u8]>) -> Result<Self> {
        let body = body.ok_or(Error::InvalidJson)?;

        let value: Value = serde_json::from_slice(body).map_err(|_| Error::InvalidJson)?;
        if !value.is_object() {
            return Err(Error::InvalidJson);
        }

        let raw: RawAuthRequest = serde_json::from_value(value).map_err(|_| Error::InvalidJson)?;

        match (raw.username, raw.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok(Self { username, password })
            }
            _ => Err(Error::MissingCredentials),
        }
    }
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

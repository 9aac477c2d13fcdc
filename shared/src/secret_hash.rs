//! Cognito `SECRET_HASH` computation.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the `SECRET_HASH` Cognito expects from app clients that hold a secret.
///
/// Base64 of `HMAC-SHA256(client_secret, username ++ client_id)`.
pub fn compute_secret_hash(client_secret: &str, username: &str, client_id: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(client_secret.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC-SHA256 accepts keys of any length"));

    mac.update(username.as_bytes());
    mac.update(client_id.as_bytes());

    STANDARD.encode(mac.finalize().into_bytes())
}

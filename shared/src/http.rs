//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde_json::{json, Value};

/// Status code and JSON body produced for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: Value,
}

impl ResponseEnvelope {
    pub fn new(status_code: u16, body: Value) -> Self {
        Self { status_code, body }
    }

    /// `{"message": ...}` body.
    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        Self::new(status_code, json!({ "message": message.into() }))
    }

    /// `500 {"message": "Internal Server Error", "error": ...}`.
    pub fn internal_error(error: impl Into<String>) -> Self {
        Self::new(
            500,
            json!({
                "message": "Internal Server Error",
                "error": error.into(),
            }),
        )
    }

    /// Convert into a Lambda HTTP response.
    pub fn into_response(self) -> Result<Response<Body>, lambda_http::Error> {
        json_response(self.status_code, &self.body)
    }
}

/// Create a JSON response with the given status code and body.
pub fn json_response(status: u16, body: &Value) -> Result<Response<Body>, lambda_http::Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .map_err(Box::new)?;

    Ok(response)
}

/// Raw bytes of a request body, `None` when the request carried none.
pub fn body_bytes(body: &Body) -> Option<&[u8]> {
    match body {
        Body::Empty => None,
        Body::Text(text) => Some(text.as_bytes()),
        Body::Binary(bytes) => Some(bytes.as_slice()),
    }
}

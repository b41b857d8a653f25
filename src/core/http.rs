use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        USER_AGENT,
    },
    Client,
    Response,
};
use serde::Deserialize;

use crate::core::PrismError;

/// Shared async client. No request timeout is configured: a refresh waits for
/// the service for as long as it takes.
pub fn http_client() -> Result<Client, PrismError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("prism3d/0.1 (+reqwest)"));

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| PrismError::Custom(format!("HTTP client build failed: {e}")))
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Turns a non-2xx response into [`PrismError::Api`], pulling the service's
/// `error.message` out of the body when it has one.
pub async fn ensure_success(resp: Response) -> Result<Response, PrismError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        }
        Err(_) => body,
    };

    Err(PrismError::Api { status: status.as_u16(), message })
}

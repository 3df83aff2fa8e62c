// src/api/mod.rs

pub mod application;
pub mod recruitment;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::error::ApiError;

/// Backend error code that signals an expired bearer token. Detected here,
/// at the wrapper level, independent of the calling page; the caller clears
/// stored credentials and redirects.
pub const TOKEN_EXPIRED_CODE: &str = "EXPIRED_TOKEN";

/// Shape of a backend error body. Both fields are optional because older
/// responses carry only one of them.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Thin typed client over the backend REST API.
///
/// One outstanding request per user action; no automatic retries (the
/// final-result fetch is the single configured exception), no request
/// de-duplication, no cancellation — dropping the future discards the
/// result.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attaches a bearer token to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and decodes a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_response(status, &body)
    }

    /// Sends the request, expecting no meaningful body.
    pub(crate) async fn send_no_content(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response.text().await?;
        Err(classify_error_body(status, &body))
    }
}

/// Pure response decoding, factored out so classification is testable
/// without a socket.
pub(crate) fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        serde_json::from_str(body).map_err(|e| {
            tracing::error!(status, "failed to decode response body: {}", e);
            ApiError::Decode(e.to_string())
        })
    } else {
        Err(classify_error_body(status, body))
    }
}

/// Maps a non-2xx body to an [`ApiError`]. A malformed JSON body is carried
/// as plain text, never a hard failure.
pub(crate) fn classify_error_body(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if parsed.code.as_deref() == Some(TOKEN_EXPIRED_CODE) => {
            tracing::error!(status, "bearer token expired");
            ApiError::TokenExpired
        }
        Ok(parsed) => ApiError::Http {
            status,
            message: parsed.message.unwrap_or_else(|| body.to_string()),
        },
        Err(_) => ApiError::Http {
            status,
            message: body.to_string(),
        },
    }
}

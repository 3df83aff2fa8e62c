// src/error.rs

use std::fmt;

/// Crate-wide error enum.
///
/// Every failure is scoped to a single user action; nothing here is fatal.
/// The UI surfaces `user_message` in a toast and stays retryable.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (DNS, refused connection, timeout).
    Network(String),

    /// The backend answered non-2xx. `message` is the backend's message, or
    /// the raw body when the body was not valid JSON.
    Http { status: u16, message: String },

    /// The backend signaled an expired bearer token. The caller clears
    /// stored credentials and redirects to login.
    TokenExpired,

    /// A 2xx body that did not deserialize into the expected shape.
    Decode(String),

    /// Required items are still unanswered; submission was blocked before
    /// any network call.
    Validation { missing_required: usize },

    /// A submit is already in flight; submissions are serialized.
    SubmitInFlight,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Http { status, message } => {
                write!(f, "http {}: {}", status, message)
            }
            ApiError::TokenExpired => write!(f, "token expired"),
            ApiError::Decode(msg) => write!(f, "decode error: {}", msg),
            ApiError::Validation { missing_required } => {
                write!(f, "{} required answers missing", missing_required)
            }
            ApiError::SubmitInFlight => write!(f, "submission already in flight"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Korean user-facing toast text.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Network(_) | ApiError::Http { .. } | ApiError::Decode(_) => {
                "요청을 처리하지 못했습니다. 잠시 후 다시 시도해 주세요."
            }
            ApiError::TokenExpired => "로그인이 만료되었습니다. 다시 로그인해 주세요.",
            ApiError::Validation { .. } => "필수 항목을 모두 입력해 주세요.",
            ApiError::SubmitInFlight => "이미 제출 중입니다.",
        }
    }
}

/// Lets `?` lift transport failures out of reqwest calls.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

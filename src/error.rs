//! Error types for the exchange client library.

use thiserror::Error;

/// The main error type for all exchange client operations.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The exchange answered with a non-2xx status
    #[error("Exchange API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Wallet key or signing error
    #[error("Signing error: {0}")]
    Signing(String),

    /// Date string did not match `YYYY-MM-DD-HH:MM:SS` or is not a real date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Request parameters could not be encoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A non-2xx response from the exchange.
///
/// The body is kept verbatim; the exchange defines its own error shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => write!(f, "HTTP {}: {}", self.status, message),
            None => write!(f, "HTTP {}: {}", self.status, self.body),
        }
    }
}

impl ApiError {
    /// Create a new API error from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Best-effort human readable message.
    ///
    /// Looks for a `message` or `error` string field when the body is a JSON
    /// object.
    pub fn message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        ["message", "error"]
            .iter()
            .find_map(|field| value.get(field)?.as_str().map(str::to_owned))
    }

    /// Check if the API key or signature was rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.status == 429
    }

    /// Check if the exchange failed on its side.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

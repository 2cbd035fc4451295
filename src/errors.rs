//! Error handling

use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    /// A string could not be parsed as a database, document, view or attachment path
    #[error("Invalid path: {0}")]
    PathParse(#[from] PathParseError),

    /// A string could not be parsed as a document revision
    #[error("Invalid revision: {0}")]
    RevisionParse(#[from] RevisionParseError),

    /// The server rejected the request as malformed (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(ErrorResponse),

    /// The client lacks permission for the request (HTTP 401)
    #[error("Unauthorized: {0}")]
    Unauthorized(ErrorResponse),

    /// The database, document or attachment does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(ErrorResponse),

    /// The document revision does not match the latest revision (HTTP 409)
    #[error("Conflict: {0}")]
    Conflict(ErrorResponse),

    /// The database already exists (HTTP 412)
    #[error("Database exists: {0}")]
    DatabaseExists(ErrorResponse),

    /// The server answered with a status the action does not expect
    #[error("Unexpected server response: HTTP {status}{}", display_response(.response))]
    ServerResponse {
        /// Response status
        status: StatusCode,
        /// Decoded error body, if the server sent one
        response: Option<ErrorResponse>,
    },

    /// The response body was expected to be JSON but was not
    #[error("Response is not JSON (content type: {})", .0.as_deref().unwrap_or("none"))]
    ResponseNotJson(Option<String>),

    /// Document content did not serialize to a JSON object
    #[error("Document content must be a JSON object")]
    ContentNotAnObject,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Inline attachment data was not valid base64
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

fn display_response(response: &Option<ErrorResponse>) -> String {
    match response {
        Some(response) => format!(" ({})", response),
        None => String::new(),
    }
}

impl Error {
    /// Whether the error is a CouchDB `not_found`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Whether the error is a revision conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }

    /// Whether retrying the same request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_connect() || e.is_timeout(),
            Error::ServerResponse { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }

    /// The server's error body, for errors that carry one
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::BadRequest(r)
            | Error::Unauthorized(r)
            | Error::NotFound(r)
            | Error::Conflict(r)
            | Error::DatabaseExists(r) => Some(r),
            Error::ServerResponse { response, .. } => response.as_ref(),
            _ => None,
        }
    }
}

/// Statuses for which the transport retries a read
pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

/// The JSON error body CouchDB sends with a failed request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    error: String,
    #[serde(default)]
    reason: String,
}

impl ErrorResponse {
    /// Create an error response
    pub fn new(error: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            reason: reason.into(),
        }
    }

    /// Short error name, e.g. `not_found`
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Human-readable explanation, e.g. `missing`
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            f.write_str(&self.error)
        } else {
            write!(f, "{}: {}", self.error, self.reason)
        }
    }
}

/// Why a path string was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathParseError {
    #[error("path {0:?} does not begin with a slash")]
    NoLeadingSlash(String),

    #[error("path {0:?} ends with a slash")]
    TrailingSlash(String),

    #[error("path {0:?} contains an empty segment")]
    EmptySegment(String),

    #[error("path {0:?} has too few segments")]
    TooFewSegments(String),

    #[error("path {0:?} has too many segments")]
    TooManySegments(String),

    #[error("path {path:?} has segment {got:?} where {expected:?} was expected")]
    BadSegment {
        path: String,
        expected: &'static str,
        got: String,
    },
}

/// Why a revision string was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevisionParseError {
    #[error("revision {0:?} has no '-' separator")]
    MissingSeparator(String),

    #[error("revision {0:?} has a malformed sequence number")]
    BadSequenceNumber(String),

    #[error("revision {0:?} has a malformed digest")]
    BadDigest(String),
}

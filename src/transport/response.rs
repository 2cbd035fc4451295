//! HTTP responses

use crate::errors::{Error, ErrorResponse, Result};
use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// A fully received HTTP response
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    content_type: Option<String>,
    body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: Bytes::new(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Set a JSON body and content type
    pub fn with_json_body(self, body: &serde_json::Value) -> Self {
        self.with_content_type("application/json")
            .with_body(body.to_string())
    }

    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        Ok(Self {
            status,
            content_type,
            body,
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|mime| {
                let mime = mime.trim();
                mime == "application/json" || mime.ends_with("+json")
            })
            .unwrap_or(false)
    }

    /// Decode a JSON body
    pub fn decode_json_body<T: DeserializeOwned>(&self) -> Result<T> {
        if !self.is_json() {
            return Err(Error::ResponseNotJson(self.content_type.clone()));
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The error body, if the server sent a decodable one
    ///
    /// The content type is not checked: CouchDB sends JSON error bodies as
    /// `text/plain` when the request did not accept JSON.
    pub fn try_error_response(&self) -> Option<ErrorResponse> {
        serde_json::from_slice(&self.body).ok()
    }

    /// The error body, or one synthesized from the status line
    pub fn error_response(&self) -> ErrorResponse {
        self.try_error_response().unwrap_or_else(|| {
            ErrorResponse::new(self.status.canonical_reason().unwrap_or("Unknown"), "")
        })
    }
}

impl Error {
    pub(crate) fn bad_request(response: Response) -> Self {
        Error::BadRequest(response.error_response())
    }

    pub(crate) fn unauthorized(response: Response) -> Self {
        Error::Unauthorized(response.error_response())
    }

    pub(crate) fn not_found(response: Response) -> Self {
        Error::NotFound(response.error_response())
    }

    pub(crate) fn conflict(response: Response) -> Self {
        Error::Conflict(response.error_response())
    }

    pub(crate) fn database_exists(response: Response) -> Self {
        Error::DatabaseExists(response.error_response())
    }

    pub(crate) fn server_response(response: Response) -> Self {
        Error::ServerResponse {
            status: response.status(),
            response: response.try_error_response(),
        }
    }
}

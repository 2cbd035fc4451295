//! Server-independent description of an HTTP request

use crate::revision::Revision;
use reqwest::Method;
use serde_json::Value;

/// Options shared by all requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    accept: Option<&'static str>,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `Accept: application/json`
    pub fn with_accept_json(self) -> Self {
        self.with_accept("application/json")
    }

    /// Send an `Accept` header with the given media ranges
    pub fn with_accept(mut self, accept: &'static str) -> Self {
        self.accept = Some(accept);
        self
    }

    /// Add the `rev` query parameter
    pub fn with_revision_query(self, revision: &Revision) -> Self {
        self.with_query("rev", revision.to_string())
    }

    /// Add the `attachments` query parameter
    pub fn with_attachments_query(self, attachments: bool) -> Self {
        self.with_query("attachments", attachments.to_string())
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Send a JSON body
    pub fn with_json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// An HTTP request relative to the server's base URL
///
/// Path segments are kept raw; the transport percent-encodes them when it
/// builds the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    path: Vec<String>,
    options: RequestOptions,
}

impl Request {
    pub fn new<'a, P>(method: Method, path: P, options: RequestOptions) -> Self
    where
        P: IntoIterator<Item = &'a str>,
    {
        Self {
            method,
            path: path.into_iter().map(str::to_string).collect(),
            options,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.options.query
    }

    pub fn accept(&self) -> Option<&str> {
        self.options.accept
    }

    /// Whether the `Accept` header names `application/json`
    pub fn accepts_json(&self) -> bool {
        self.accept()
            .is_some_and(|accept| accept.split(',').any(|range| range.trim() == "application/json"))
    }

    pub fn body(&self) -> Option<&Value> {
        self.options.body.as_ref()
    }
}

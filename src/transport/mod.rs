//! HTTP transport
//!
//! Actions describe requests as [`Request`] values; the [`Transport`] turns
//! them into URLs under the server's base URL, sends them with reqwest and
//! hands the received [`Response`] back to the action.

mod request;
mod response;
mod retry;


pub use request::{Request, RequestOptions};
pub use response::Response;
pub use retry::{RetryConfig, RetryPolicy};

pub use reqwest::{Method, StatusCode};

use crate::action::Action;
use crate::config::{ClientConfig, Credentials};
use crate::errors::{Error, Result};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Sends requests to one CouchDB server
#[derive(Debug, Clone)]
pub struct Transport {
    http_client: reqwest::Client,
    base_url: Url,
    credentials: Option<Credentials>,
    retry_policy: RetryPolicy,
}

impl Transport {
    /// Create a transport for the configured server
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("sofa-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        let retry_policy = RetryPolicy::new(RetryConfig {
            max_retries: config.max_retries,
            base_delay: Duration::from_millis(config.retry_delay_ms),
            ..RetryConfig::default()
        });

        Ok(Self {
            http_client,
            base_url,
            credentials: config.credentials.clone(),
            retry_policy,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The absolute URL of a request, with path segments percent-encoded
    pub fn url_for(&self, request: &Request) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Server URL {} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(request.path());

        if !request.query().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query());
        }

        Ok(url)
    }

    /// Send a request, retrying transient failures
    pub async fn send(&self, request: &Request) -> Result<Response> {
        let url = self.url_for(request)?;
        debug!("{} {}", request.method(), url.path());

        let response = self
            .retry_policy
            .call(request.method(), || self.send_once(request, url.clone()))
            .await?;

        debug!("{} {} -> {}", request.method(), url.path(), response.status());
        Ok(response)
    }

    async fn send_once(&self, request: &Request, url: Url) -> Result<Response> {
        let mut builder = self.http_client.request(request.method().clone(), url);

        if let Some(accept) = request.accept() {
            builder = builder.header(reqwest::header::ACCEPT, accept);
        }
        if let Some(credentials) = &self.credentials {
            builder = builder.basic_auth(&credentials.username, Some(&credentials.password));
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        Response::from_reqwest(response).await
    }

    /// Execute an action: build its request, send it, and interpret the response
    pub async fn exec<A: Action>(&self, action: A) -> Result<A::Output> {
        let (request, state) = action.make_request()?;
        let response = self.send(&request).await?;
        A::take_response(response, state)
    }
}

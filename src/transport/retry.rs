//! Retry mechanism with exponential backoff

use super::Response;
use crate::errors::{Error, Result, is_retryable_status};
use reqwest::{Method, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Retry configuration
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Upper bound on any single delay
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry
    pub backoff_multiplier: f64,
    /// Randomize each delay by ±5%
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

/// Retries requests that failed on the connection or with a transient status
#[derive(Debug, Clone, Default)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Whether `outcome` warrants another attempt of a `method` request
    ///
    /// Safe methods are retried after any transient failure. Writes are
    /// retried only when the server cannot have applied them: the connection
    /// was never made, or the server answered 429 or 503.
    fn should_retry(method: &Method, outcome: &Result<Response>) -> bool {
        if method.is_safe() {
            return match outcome {
                Ok(response) => is_retryable_status(response.status()),
                Err(error) => error.is_retryable(),
            };
        }

        match outcome {
            Ok(response) => matches!(
                response.status(),
                StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE
            ),
            Err(Error::Http(e)) => e.is_connect(),
            Err(_) => false,
        }
    }

    /// Run `f` until it succeeds, fails permanently or runs out of retries
    ///
    /// A response with a transient status is returned as is once retries are
    /// exhausted, so the caller still maps it to an error.
    pub async fn call<F, Fut>(&self, method: &Method, mut f: F) -> Result<Response>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<Response>>,
    {
        let mut attempt = 0;
        let mut delay = self.config.base_delay;

        loop {
            attempt += 1;
            let outcome = f().await;

            if !Self::should_retry(method, &outcome) {
                if attempt > 1 {
                    debug!("Request settled on attempt {}", attempt);
                }
                return outcome;
            }

            if attempt > self.config.max_retries {
                warn!("Giving up after {} attempts", attempt);
                return outcome;
            }

            match &outcome {
                Ok(response) => debug!(
                    "Attempt {} returned HTTP {}, retrying in {:?}",
                    attempt,
                    response.status(),
                    delay
                ),
                Err(error) => debug!(
                    "Attempt {} failed: {}, retrying in {:?}",
                    attempt, error, delay
                ),
            }

            let actual_delay = if self.config.jitter {
                let jitter_factor = 0.1;
                let jitter =
                    delay.as_millis() as f64 * jitter_factor * (rand::random::<f64>() - 0.5);
                Duration::from_millis((delay.as_millis() as f64 + jitter).max(0.0) as u64)
            } else {
                delay
            };

            tokio::time::sleep(actual_delay).await;

            delay = std::cmp::min(
                Duration::from_millis(
                    (delay.as_millis() as f64 * self.config.backoff_multiplier) as u64,
                ),
                self.config.max_delay,
            );
        }
    }
}

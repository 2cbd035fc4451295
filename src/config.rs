//! Client configuration

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use url::Url;

/// Default CouchDB server address
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5984/";

/// Settings for connecting to a CouchDB server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the CouchDB server
    pub server_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Retries after a transient failure
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds
    pub retry_delay_ms: u64,
    /// HTTP basic auth credentials
    pub credentials: Option<Credentials>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout: 30,
            max_retries: 2,
            retry_delay_ms: 100,
            credentials: None,
        }
    }
}

/// Username and password for HTTP basic auth
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Builder for [`ClientConfig`]
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Base URL of the CouchDB server
    pub fn server_url(mut self, server_url: &str) -> Self {
        self.config.server_url = server_url.to_string();
        self
    }

    /// Request timeout in seconds
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Retries after a transient failure
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Delay before the first retry, in milliseconds
    pub fn retry_delay_ms(mut self, delay: u64) -> Self {
        self.config.retry_delay_ms = delay;
        self
    }

    /// Authenticate with HTTP basic auth
    pub fn credentials(mut self, username: &str, password: &str) -> Self {
        self.config.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Finish building the configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} must be a number, got {:?}", key, value)))
}

impl ClientConfig {
    /// Configuration from `COUCHDB_*` environment variables
    ///
    /// Reads `COUCHDB_URL`, `COUCHDB_USER`, `COUCHDB_PASSWORD`,
    /// `COUCHDB_TIMEOUT` and `COUCHDB_MAX_RETRIES`. Unset variables keep their
    /// defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`], reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ConfigBuilder::new();

        if let Some(url) = lookup("COUCHDB_URL") {
            builder = builder.server_url(&url);
        }

        match (lookup("COUCHDB_USER"), lookup("COUCHDB_PASSWORD")) {
            (Some(user), Some(password)) => builder = builder.credentials(&user, &password),
            (Some(user), None) => builder = builder.credentials(&user, ""),
            (None, Some(_)) => {
                return Err(Error::Config(
                    "COUCHDB_PASSWORD is set but COUCHDB_USER is not".to_string(),
                ));
            }
            (None, None) => {}
        }

        if let Some(timeout) = lookup("COUCHDB_TIMEOUT") {
            builder = builder.timeout(parse_env_number("COUCHDB_TIMEOUT", &timeout)?);
        }

        if let Some(retries) = lookup("COUCHDB_MAX_RETRIES") {
            builder = builder.max_retries(parse_env_number("COUCHDB_MAX_RETRIES", &retries)?);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }

    /// Configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// The server URL, parsed and checked
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.server_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Server URL must use http or https, got {}",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Server URL {} cannot be a base",
                url
            )));
        }
        Ok(url)
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;
        if self.timeout == 0 {
            return Err(Error::Config("Timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}

//! Mock CouchDB server

use sofa::{Client, ClientConfig, ConfigBuilder};
use wiremock::MockServer;

/// A wiremock server standing in for CouchDB
pub struct MockCouch {
    pub server: MockServer,
}

impl MockCouch {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Configuration pointing at the mock server, with fast retries
    pub fn config(&self) -> ClientConfig {
        ConfigBuilder::new()
            .server_url(&self.server.uri())
            .timeout(5)
            .retry_delay_ms(1)
            .build()
    }

    pub fn client(&self) -> Client {
        Client::new(self.config()).expect("mock server config is valid")
    }
}

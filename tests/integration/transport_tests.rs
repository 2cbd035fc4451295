//! Transport integration tests: retries, authentication and URLs

#[cfg(test)]
mod tests {
    use crate::common::MockCouch;
    use crate::common::fixtures::{error_response, ok_response, write_response};
    use crate::{assert_err, assert_ok};
    use serde_json::json;
    use sofa::{Client, ConfigBuilder, Error, StatusCode};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_retries_service_unavailable() {
        let couch = MockCouch::start().await;
        Mock::given(method("PUT"))
            .and(path("/baseball"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .expect(2)
            .mount(&couch.server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/baseball"))
            .respond_with(ok_response(201))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        assert_ok!(client.create_database("/baseball").run().await);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/babe_ruth"))
            .respond_with(error_response(503, "service_unavailable", "maintenance"))
            .expect(3)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(client.read_document("/baseball/babe_ruth").run().await);
        match error {
            Error::ServerResponse { status, response } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(response.map(|r| r.reason().to_string()), Some("maintenance".to_string()));
            }
            e => panic!("Got unexpected error {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let couch = MockCouch::start().await;
        Mock::given(method("PUT"))
            .and(path("/baseball"))
            .respond_with(error_response(400, "illegal_database_name", "Name: 'Baseball'"))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(client.create_database("/baseball").run().await);
        assert!(matches!(error, Error::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_basic_auth_header() {
        let couch = MockCouch::start().await;
        // admin:secret
        Mock::given(method("DELETE"))
            .and(path("/baseball"))
            .and(header("authorization", "Basic YWRtaW46c2VjcmV0"))
            .respond_with(ok_response(200))
            .expect(1)
            .mount(&couch.server)
            .await;

        let config = ConfigBuilder::new()
            .server_url(&couch.server.uri())
            .credentials("admin", "secret")
            .build();
        let client = assert_ok!(Client::new(config));
        assert_ok!(client.delete_database("/baseball").run().await);
    }

    #[tokio::test]
    async fn test_create_document_not_retried_after_bad_gateway() {
        let couch = MockCouch::start().await;
        Mock::given(method("POST"))
            .and(path("/baseball"))
            .respond_with(ResponseTemplate::new(502))
            .up_to_n_times(1)
            .expect(1)
            .mount(&couch.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/baseball"))
            .respond_with(write_response(201, "a1b2c3", "1-abc"))
            .expect(0)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let content = json!({ "name": "Babe Ruth" });
        let error = assert_err!(client.create_document("/baseball", &content).run().await);
        match error {
            Error::ServerResponse { status, .. } => assert_eq!(status, StatusCode::BAD_GATEWAY),
            e => panic!("Got unexpected error {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_create_document_retried_after_service_unavailable() {
        let couch = MockCouch::start().await;
        Mock::given(method("POST"))
            .and(path("/baseball"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&couch.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/baseball"))
            .respond_with(write_response(201, "a1b2c3", "1-abc"))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let content = json!({ "name": "Babe Ruth" });
        let (id, _) = assert_ok!(client.create_document("/baseball", &content).run().await);
        assert_eq!(id.to_string(), "a1b2c3");
    }

    #[tokio::test]
    async fn test_create_database_not_retried_after_gateway_timeout() {
        let couch = MockCouch::start().await;
        Mock::given(method("PUT"))
            .and(path("/baseball"))
            .respond_with(ResponseTemplate::new(504))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(client.create_database("/baseball").run().await);
        assert!(error.is_retryable());
    }
}

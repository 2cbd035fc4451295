//! Database action integration tests

#[cfg(test)]
mod tests {
    use crate::common::MockCouch;
    use crate::common::fixtures::{error_response, ok_response};
    use crate::{assert_err, assert_ok};
    use sofa::{DatabaseName, Error};
    use wiremock::Mock;
    use wiremock::matchers::{header, method, path};

    // ==================== Create ====================

    #[tokio::test]
    async fn test_create_database() {
        let couch = MockCouch::start().await;
        Mock::given(method("PUT"))
            .and(path("/baseball"))
            .and(header("accept", "application/json"))
            .respond_with(ok_response(201))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        assert_ok!(client.create_database("/baseball").run().await);
    }

    #[tokio::test]
    async fn test_create_database_from_name() {
        let couch = MockCouch::start().await;
        Mock::given(method("PUT"))
            .and(path("/baseball"))
            .respond_with(ok_response(202))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let db_name = DatabaseName::from("baseball");
        assert_ok!(client.create_database(&db_name).run().await);
    }

    #[tokio::test]
    async fn test_create_database_exists() {
        let couch = MockCouch::start().await;
        Mock::given(method("PUT"))
            .and(path("/baseball"))
            .respond_with(error_response(
                412,
                "file_exists",
                "The database could not be created, the file already exists.",
            ))
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(client.create_database("/baseball").run().await);
        match error {
            Error::DatabaseExists(r) => assert_eq!(r.error(), "file_exists"),
            e => panic!("Got unexpected error {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_create_database_bad_path_sends_nothing() {
        let couch = MockCouch::start().await;
        Mock::given(method("PUT"))
            .respond_with(ok_response(201))
            .expect(0)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(client.create_database("baseball").run().await);
        assert!(matches!(error, Error::PathParse(_)));
    }

    // ==================== Delete ====================

    #[tokio::test]
    async fn test_delete_database() {
        let couch = MockCouch::start().await;
        Mock::given(method("DELETE"))
            .and(path("/baseball"))
            .respond_with(ok_response(200))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        assert_ok!(client.delete_database("/baseball").run().await);
    }

    #[tokio::test]
    async fn test_delete_database_not_found() {
        let couch = MockCouch::start().await;
        Mock::given(method("DELETE"))
            .and(path("/baseball"))
            .respond_with(error_response(404, "not_found", "Database does not exist."))
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(client.delete_database("/baseball").run().await);
        assert!(error.is_not_found());
        assert_eq!(
            error.error_response().map(|r| r.reason()),
            Some("Database does not exist.")
        );
    }

    #[tokio::test]
    async fn test_delete_database_unauthorized() {
        let couch = MockCouch::start().await;
        Mock::given(method("DELETE"))
            .and(path("/baseball"))
            .respond_with(error_response(
                401,
                "unauthorized",
                "You are not a server admin.",
            ))
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(client.delete_database("/baseball").run().await);
        assert!(matches!(error, Error::Unauthorized(_)));
    }
}

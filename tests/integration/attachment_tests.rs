//! Attachment integration tests

#[cfg(test)]
mod tests {
    use crate::common::MockCouch;
    use crate::common::fixtures::error_response;
    use crate::{assert_err, assert_ok};
    use sofa::{AttachmentPath, Error, Revision};
    use wiremock::matchers::{headers, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_read_attachment() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/babe_ruth/photo.jpg"))
            .and(headers("accept", vec!["application/json", "*/*"]))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(b"\xff\xd8\xff\xe0".to_vec(), "image/jpeg"),
            )
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let body = assert_ok!(
            client
                .read_attachment("/baseball/babe_ruth/photo.jpg")
                .run()
                .await
        );
        assert_eq!(body.content_type(), Some("image/jpeg"));
        assert_eq!(body.content(), b"\xff\xd8\xff\xe0");
    }

    #[tokio::test]
    async fn test_read_attachment_with_slash_in_name() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/babe_ruth/cards%2F1927.txt"))
            .and(query_param("rev", "2-abc"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("Yankees", "text/plain"))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let att_path = AttachmentPath::new("baseball", "babe_ruth", "cards/1927.txt");
        let rev = assert_ok!(Revision::parse("2-abc"));
        let body = assert_ok!(
            client
                .read_attachment(&att_path)
                .with_revision(&rev)
                .run()
                .await
        );
        assert_eq!(body.into_content().as_ref(), b"Yankees");
    }

    #[tokio::test]
    async fn test_read_missing_attachment() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/babe_ruth/signature.png"))
            .respond_with(error_response(
                404,
                "not_found",
                "Document is missing attachment",
            ))
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(
            client
                .read_attachment(("/baseball/babe_ruth", "signature.png"))
                .run()
                .await
        );
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_read_missing_attachment_plain_text_error() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/babe_ruth/signature.png"))
            .respond_with(ResponseTemplate::new(404).set_body_raw(
                r#"{"error":"not_found","reason":"Document is missing attachment"}"#,
                "text/plain",
            ))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(
            client
                .read_attachment(("/baseball/babe_ruth", "signature.png"))
                .run()
                .await
        );
        match error {
            Error::NotFound(body) => {
                assert_eq!(body.error(), "not_found");
                assert_eq!(body.reason(), "Document is missing attachment");
            }
            e => panic!("Got unexpected error {:?}", e),
        }
    }
}

//! Document action integration tests

#[cfg(test)]
mod tests {
    use crate::common::MockCouch;
    use crate::common::fixtures::{
        BABE_RUTH_REV, babe_ruth, error_response, json_response, write_response,
    };
    use crate::{assert_err, assert_ok};
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use sofa::{AttachmentContent, DocumentId, Error, Revision};
    use wiremock::Mock;
    use wiremock::matchers::{body_json, method, path, query_param};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Player {
        name: String,
        team: String,
        home_runs: u32,
    }

    // ==================== Create ====================

    #[tokio::test]
    async fn test_create_document_with_server_id() {
        let couch = MockCouch::start().await;
        Mock::given(method("POST"))
            .and(path("/baseball"))
            .and(body_json(json!({ "name": "Babe Ruth", "team": "Yankees", "home_runs": 714 })))
            .respond_with(write_response(201, "a1b2c3", "1-abc"))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let player = Player {
            name: "Babe Ruth".to_string(),
            team: "Yankees".to_string(),
            home_runs: 714,
        };
        let (id, rev) = assert_ok!(client.create_document("/baseball", &player).run().await);
        assert_eq!(id, DocumentId::from("a1b2c3"));
        assert_eq!(rev, assert_ok!(Revision::parse("1-abc")));
    }

    #[tokio::test]
    async fn test_create_design_document_with_id() {
        let couch = MockCouch::start().await;
        Mock::given(method("PUT"))
            .and(path("/baseball/_design/stats"))
            .respond_with(write_response(201, "_design/stats", "1-abc"))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let content = json!({ "views": {} });
        let (id, _) = assert_ok!(
            client
                .create_document("/baseball", &content)
                .with_document_id("_design/stats")
                .run()
                .await
        );
        assert!(id.is_design());
    }

    #[tokio::test]
    async fn test_create_document_conflict() {
        let couch = MockCouch::start().await;
        Mock::given(method("PUT"))
            .and(path("/baseball/babe_ruth"))
            .respond_with(error_response(409, "conflict", "Document update conflict."))
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let content = json!({ "name": "Babe Ruth" });
        let error = assert_err!(
            client
                .create_document("/baseball", &content)
                .with_document_id("babe_ruth")
                .run()
                .await
        );
        assert!(error.is_conflict());
    }

    #[tokio::test]
    async fn test_create_document_rejects_non_object() {
        let couch = MockCouch::start().await;
        let client = couch.client();
        let error = assert_err!(client.create_document("/baseball", &[1, 2, 3]).run().await);
        assert!(matches!(error, Error::ContentNotAnObject));
    }

    // ==================== Read ====================

    #[tokio::test]
    async fn test_read_document() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/babe_ruth"))
            .respond_with(json_response(200, babe_ruth()))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let doc = assert_ok!(client.read_document(("/baseball", "babe_ruth")).run().await);

        assert_eq!(doc.path().to_string(), "/baseball/babe_ruth");
        assert_eq!(doc.revision().to_string(), BABE_RUTH_REV);
        assert!(!doc.content().contains_key("_id"));
        assert!(!doc.content().contains_key("_attachments"));

        let player: Player = assert_ok!(doc.get_content());
        assert_eq!(player.home_runs, 714);

        let photo = doc.get_attachment("photo.jpg").expect("attachment stub");
        assert!(photo.is_saved());
        assert_eq!(photo.content_type(), "image/jpeg");
        assert!(photo.content().is_none());
    }

    #[tokio::test]
    async fn test_read_document_with_revision_and_attachments() {
        let couch = MockCouch::start().await;
        let mut body = babe_ruth();
        body["_attachments"]["photo.jpg"] = json!({
            "content_type": "image/jpeg",
            "revpos": 1,
            "digest": "md5-2JdGiI2i2VELZKnwMers1Q==",
            "data": "/9j/4A=="
        });
        Mock::given(method("GET"))
            .and(path("/baseball/babe_ruth"))
            .and(query_param("rev", BABE_RUTH_REV))
            .and(query_param("attachments", "true"))
            .respond_with(json_response(200, body))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let rev = assert_ok!(Revision::parse(BABE_RUTH_REV));
        let doc = assert_ok!(
            client
                .read_document("/baseball/babe_ruth")
                .with_revision(&rev)
                .with_attachment_content(AttachmentContent::All)
                .run()
                .await
        );
        let photo = doc.get_attachment("photo.jpg").expect("attachment");
        assert_eq!(photo.content(), Some(&[0xff, 0xd8, 0xff, 0xe0][..]));
    }

    #[tokio::test]
    async fn test_read_local_document_percent_encodes_slash() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/_local/a%2Fb"))
            .respond_with(json_response(
                200,
                json!({ "_id": "_local/a/b", "_rev": "0-1", "checkpoint": 42 }),
            ))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let doc = assert_ok!(client.read_document(("/baseball", "_local/a/b")).run().await);
        assert!(doc.id().is_local());
        assert_eq!(doc.revision().sequence_number(), 0);
        assert_eq!(doc.revision().to_string(), "0-1");
        assert_eq!(doc.content()["checkpoint"], 42);
    }

    #[tokio::test]
    async fn test_read_document_not_found() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/lou_gehrig"))
            .respond_with(error_response(404, "not_found", "missing"))
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(client.read_document("/baseball/lou_gehrig").run().await);
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_read_document_html_body_is_not_json() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/babe_ruth"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"),
            )
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(client.read_document("/baseball/babe_ruth").run().await);
        assert!(matches!(error, Error::ResponseNotJson(Some(ref t)) if t == "text/html"));
    }

    // ==================== Update ====================

    #[tokio::test]
    async fn test_update_document_sends_stubs_and_new_attachments() {
        let couch = MockCouch::start().await;
        Mock::given(method("PUT"))
            .and(path("/baseball/babe_ruth"))
            .and(body_json(json!({
                "_id": "babe_ruth",
                "_rev": BABE_RUTH_REV,
                "name": "Babe Ruth",
                "team": "Red Sox",
                "home_runs": 714,
                "_attachments": {
                    "photo.jpg": { "stub": true },
                    "card.txt": { "content_type": "text/plain", "data": "aGk=" }
                }
            })))
            .respond_with(write_response(201, "babe_ruth", "2-def"))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let mut doc = assert_ok!(sofa::Document::from_json("baseball", babe_ruth()));
        assert_ok!(doc.set_content(&Player {
            name: "Babe Ruth".to_string(),
            team: "Red Sox".to_string(),
            home_runs: 714,
        }));
        doc.insert_attachment("card.txt", "text/plain", b"hi".to_vec());

        let rev = assert_ok!(client.update_document(&doc).run().await);
        assert_eq!(rev.sequence_number(), 2);
    }

    #[tokio::test]
    async fn test_update_document_conflict() {
        let couch = MockCouch::start().await;
        Mock::given(method("PUT"))
            .and(path("/baseball/babe_ruth"))
            .respond_with(error_response(409, "conflict", "Document update conflict."))
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let doc = assert_ok!(sofa::Document::from_json("baseball", babe_ruth()));
        let error = assert_err!(client.update_document(&doc).run().await);
        match error {
            Error::Conflict(r) => assert_eq!(r.reason(), "Document update conflict."),
            e => panic!("Got unexpected error {:?}", e),
        }
    }

    // ==================== Delete ====================

    #[tokio::test]
    async fn test_delete_document() {
        let couch = MockCouch::start().await;
        Mock::given(method("DELETE"))
            .and(path("/baseball/babe_ruth"))
            .and(query_param("rev", BABE_RUTH_REV))
            .respond_with(write_response(200, "babe_ruth", "2-fed"))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let doc = assert_ok!(sofa::Document::from_json("baseball", babe_ruth()));
        let rev = assert_ok!(client.delete_document(doc.path(), doc.revision()).run().await);
        assert_eq!(rev.to_string(), "2-fed");
    }

    #[tokio::test]
    async fn test_delete_document_stale_revision() {
        let couch = MockCouch::start().await;
        Mock::given(method("DELETE"))
            .and(path("/baseball/babe_ruth"))
            .respond_with(error_response(409, "conflict", "Document update conflict."))
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let rev = assert_ok!(Revision::parse("1-abc"));
        let error = assert_err!(
            client
                .delete_document("/baseball/babe_ruth", &rev)
                .run()
                .await
        );
        assert!(error.is_conflict());
    }
}

//! View execution integration tests

#[cfg(test)]
mod tests {
    use crate::common::MockCouch;
    use crate::common::fixtures::{error_response, json_response, players_by_team};
    use crate::{assert_err, assert_ok};
    use serde_json::json;
    use sofa::{DocumentId, ViewPath};
    use wiremock::Mock;
    use wiremock::matchers::{method, path, query_param};

    #[tokio::test]
    async fn test_execute_view() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/_design/stats/_view/by_team"))
            .respond_with(json_response(200, players_by_team()))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let response = assert_ok!(
            client
                .execute_view("/baseball/_design/stats/_view/by_team")
                .run()
                .await
        );

        assert_eq!(response.total_rows(), Some(2));
        let ids: Vec<_> = response.rows().iter().filter_map(|r| r.id()).collect();
        assert_eq!(
            ids,
            vec![&DocumentId::from("ted_williams"), &DocumentId::from("babe_ruth")]
        );
        assert_eq!(assert_ok!(response.rows()[1].value_as::<u32>()), 714);
    }

    #[tokio::test]
    async fn test_execute_view_sends_json_query() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/_design/stats/_view/by_team"))
            .and(query_param("key", "\"Yankees\""))
            .and(query_param("include_docs", "true"))
            .and(query_param("limit", "1"))
            .respond_with(json_response(
                200,
                json!({
                    "total_rows": 2,
                    "offset": 1,
                    "rows": [{
                        "id": "babe_ruth",
                        "key": "Yankees",
                        "value": 714,
                        "doc": { "_id": "babe_ruth", "_rev": "1-abc", "name": "Babe Ruth" }
                    }]
                }),
            ))
            .expect(1)
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let view_path = ViewPath::new("baseball", "stats", "by_team");
        let response = assert_ok!(
            client
                .execute_view(&view_path)
                .with_key("Yankees")
                .with_include_docs(true)
                .with_limit(1)
                .run()
                .await
        );

        assert_eq!(response.offset(), Some(1));
        let doc = response.rows()[0].doc().expect("included document");
        assert_eq!(doc.path().to_string(), "/baseball/babe_ruth");
        assert_eq!(doc.content()["name"], "Babe Ruth");
    }

    #[tokio::test]
    async fn test_execute_reduced_view() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/_design/stats/_view/home_runs"))
            .and(query_param("group", "true"))
            .respond_with(json_response(
                200,
                json!({ "rows": [
                    { "key": "Red Sox", "value": 521 },
                    { "key": "Yankees", "value": 714 }
                ] }),
            ))
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let response = assert_ok!(
            client
                .execute_view(("/baseball", "stats", "home_runs"))
                .with_group(true)
                .run()
                .await
        );

        assert_eq!(response.total_rows(), None);
        let rows = response.into_rows();
        assert!(rows.iter().all(|r| r.id().is_none()));
        assert_eq!(assert_ok!(rows[0].key_as::<String>()), "Red Sox");
    }

    #[tokio::test]
    async fn test_execute_missing_view() {
        let couch = MockCouch::start().await;
        Mock::given(method("GET"))
            .and(path("/baseball/_design/stats/_view/by_era"))
            .respond_with(error_response(404, "not_found", "missing_named_view"))
            .mount(&couch.server)
            .await;

        let client = couch.client();
        let error = assert_err!(
            client
                .execute_view(("/baseball", "stats", "by_era"))
                .run()
                .await
        );
        assert!(error.is_not_found());
    }
}

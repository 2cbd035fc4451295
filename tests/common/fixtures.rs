//! Response bodies as CouchDB sends them

use serde_json::{Value, json};
use wiremock::ResponseTemplate;

pub const BABE_RUTH_REV: &str = "1-967a00dff5e02add41819138abb3284d";

/// A JSON response with the given status and body
pub fn json_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

/// A CouchDB error body
pub fn error_response(status: u16, error: &str, reason: &str) -> ResponseTemplate {
    json_response(status, json!({ "error": error, "reason": reason }))
}

/// `{"ok": true}`
pub fn ok_response(status: u16) -> ResponseTemplate {
    json_response(status, json!({ "ok": true }))
}

/// The reply to a document write
pub fn write_response(status: u16, id: &str, rev: &str) -> ResponseTemplate {
    json_response(status, json!({ "ok": true, "id": id, "rev": rev }))
}

/// A stored player document with one attachment stub
pub fn babe_ruth() -> Value {
    json!({
        "_id": "babe_ruth",
        "_rev": BABE_RUTH_REV,
        "name": "Babe Ruth",
        "team": "Yankees",
        "home_runs": 714,
        "_attachments": {
            "photo.jpg": {
                "content_type": "image/jpeg",
                "revpos": 1,
                "digest": "md5-2JdGiI2i2VELZKnwMers1Q==",
                "length": 4,
                "stub": true
            }
        }
    })
}

/// A map-only view result over two players
pub fn players_by_team() -> Value {
    json!({
        "total_rows": 2,
        "offset": 0,
        "rows": [
            { "id": "ted_williams", "key": "Red Sox", "value": 521 },
            { "id": "babe_ruth", "key": "Yankees", "value": 714 }
        ]
    })
}

//! Defines an action for updating a document on the CouchDB server.

use super::{Action, WriteResponse};
use crate::document::Document;
use crate::errors::{Error, Result};
use crate::revision::Revision;
use crate::transport::{Method, Request, RequestOptions, Response, StatusCode, Transport};

/// Writes a document's content and attachments back to the server
///
/// Sends `PUT /db/doc` with the document's current revision in the body, and
/// yields the new revision. Saved attachments are sent as stubs, so they are
/// kept without being uploaded again; attachments removed from the document
/// are deleted.
///
/// # Errors
///
/// - `Error::Conflict`: the document's revision is not the latest.
/// - `Error::NotFound`: the database does not exist.
/// - `Error::Unauthorized`: the client lacks permission to write.
pub struct UpdateDocument<'a> {
    transport: &'a Transport,
    doc: &'a Document,
}

impl<'a> UpdateDocument<'a> {
    pub(crate) fn new(transport: &'a Transport, doc: &'a Document) -> Self {
        Self { transport, doc }
    }

    /// Executes the action and waits for the result
    pub async fn run(self) -> Result<Revision> {
        let transport = self.transport;
        transport.exec(self).await
    }
}

impl Action for UpdateDocument<'_> {
    type Output = Revision;
    type State = ();

    fn make_request(self) -> Result<(Request, Self::State)> {
        let request = Request::new(
            Method::PUT,
            self.doc.path().segments(),
            RequestOptions::new()
                .with_accept_json()
                .with_json_body(self.doc.to_json_body()),
        );
        Ok((request, ()))
    }

    fn take_response(response: Response, _state: Self::State) -> Result<Self::Output> {
        match response.status() {
            StatusCode::CREATED | StatusCode::ACCEPTED => {
                let body: WriteResponse = response.decode_json_body()?;
                Ok(body.rev)
            }
            StatusCode::BAD_REQUEST => Err(Error::bad_request(response)),
            StatusCode::UNAUTHORIZED => Err(Error::unauthorized(response)),
            StatusCode::NOT_FOUND => Err(Error::not_found(response)),
            StatusCode::CONFLICT => Err(Error::conflict(response)),
            _ => Err(Error::server_response(response)),
        }
    }
}

//! Defines an action for deleting a document from the CouchDB server.

use super::{Action, WriteResponse};
use crate::errors::{Error, Result};
use crate::paths::IntoDocumentPath;
use crate::revision::Revision;
use crate::transport::{Method, Request, RequestOptions, Response, StatusCode, Transport};

/// Deletes a document
///
/// Sends `DELETE /db/doc?rev=...` and yields the revision of the deletion
/// tombstone.
///
/// # Errors
///
/// - `Error::Conflict`: the given revision is not the latest.
/// - `Error::NotFound`: the database or document does not exist.
/// - `Error::Unauthorized`: the client lacks permission to delete.
pub struct DeleteDocument<'a, P> {
    transport: &'a Transport,
    doc_path: P,
    revision: &'a Revision,
}

impl<'a, P: IntoDocumentPath<'a>> DeleteDocument<'a, P> {
    pub(crate) fn new(transport: &'a Transport, doc_path: P, revision: &'a Revision) -> Self {
        Self {
            transport,
            doc_path,
            revision,
        }
    }

    /// Executes the action and waits for the result
    pub async fn run(self) -> Result<Revision> {
        let transport = self.transport;
        transport.exec(self).await
    }
}

impl<'a, P: IntoDocumentPath<'a>> Action for DeleteDocument<'a, P> {
    type Output = Revision;
    type State = ();

    fn make_request(self) -> Result<(Request, Self::State)> {
        let doc_path = self.doc_path.into_document_path()?;
        let request = Request::new(
            Method::DELETE,
            doc_path.iter(),
            RequestOptions::new()
                .with_accept_json()
                .with_revision_query(self.revision),
        );
        Ok((request, ()))
    }

    fn take_response(response: Response, _state: Self::State) -> Result<Self::Output> {
        match response.status() {
            StatusCode::OK | StatusCode::ACCEPTED => {
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

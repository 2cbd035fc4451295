//! Defines an action for creating a document on the CouchDB server.

use super::{Action, WriteResponse};
use crate::errors::{Error, Result};
use crate::names::{DocumentId, DocumentIdRef};
use crate::paths::IntoDatabasePath;
use crate::revision::Revision;
use crate::transport::{Method, Request, RequestOptions, Response, StatusCode, Transport};
use serde::Serialize;

/// Creates a document
///
/// By default the server picks the document id: the action sends `POST /db`.
/// With [`CreateDocument::with_document_id`] the action sends `PUT /db/id`
/// instead. On success the action yields the new document's id and revision.
///
/// # Errors
///
/// - `Error::ContentNotAnObject`: the content does not serialize to a JSON object.
/// - `Error::Conflict`: a document with the given id already exists.
/// - `Error::NotFound`: the database does not exist.
/// - `Error::Unauthorized`: the client lacks permission to write.
pub struct CreateDocument<'a, P, C: ?Sized> {
    transport: &'a Transport,
    db_path: P,
    content: &'a C,
    doc_id: Option<DocumentIdRef<'a>>,
}

impl<'a, P, C> CreateDocument<'a, P, C>
where
    P: IntoDatabasePath<'a>,
    C: Serialize + ?Sized,
{
    pub(crate) fn new(transport: &'a Transport, db_path: P, content: &'a C) -> Self {
        Self {
            transport,
            db_path,
            content,
            doc_id: None,
        }
    }

    /// Creates the document with the given id instead of a server-assigned one
    pub fn with_document_id(mut self, doc_id: impl Into<DocumentIdRef<'a>>) -> Self {
        self.doc_id = Some(doc_id.into());
        self
    }

    /// Executes the action and waits for the result
    pub async fn run(self) -> Result<(DocumentId, Revision)> {
        let transport = self.transport;
        transport.exec(self).await
    }
}

impl<'a, P, C> Action for CreateDocument<'a, P, C>
where
    P: IntoDatabasePath<'a>,
    C: Serialize + ?Sized,
{
    type Output = (DocumentId, Revision);
    type State = ();

    fn make_request(self) -> Result<(Request, Self::State)> {
        let db_path = self.db_path.into_database_path()?;

        let body = serde_json::to_value(self.content)?;
        if !body.is_object() {
            return Err(Error::ContentNotAnObject);
        }
        let options = RequestOptions::new().with_accept_json().with_json_body(body);

        let request = match self.doc_id {
            None => Request::new(Method::POST, db_path.iter(), options),
            Some(doc_id) => Request::new(
                Method::PUT,
                db_path.iter().chain(doc_id.url_segments()),
                options,
            ),
        };
        Ok((request, ()))
    }

    fn take_response(response: Response, _state: Self::State) -> Result<Self::Output> {
        match response.status() {
            StatusCode::CREATED | StatusCode::ACCEPTED => {
                let body: WriteResponse = response.decode_json_body()?;
                Ok((body.id, body.rev))
            }
            StatusCode::BAD_REQUEST => Err(Error::bad_request(response)),
            StatusCode::UNAUTHORIZED => Err(Error::unauthorized(response)),
            StatusCode::NOT_FOUND => Err(Error::not_found(response)),
            StatusCode::CONFLICT => Err(Error::conflict(response)),
            _ => Err(Error::server_response(response)),
        }
    }
}

//! Defines an action for reading a document from the CouchDB server.

use super::Action;
use crate::document::Document;
use crate::errors::{Error, Result};
use crate::names::DatabaseName;
use crate::paths::IntoDocumentPath;
use crate::revision::Revision;
use crate::transport::{Method, Request, RequestOptions, Response, StatusCode, Transport};

/// Reads a document from the CouchDB server and returns the result
///
/// Sends `GET /db/doc`. By default the server returns the latest revision of
/// the document, with stubs (no content) for its attachments.
///
/// # Errors
///
/// - `Error::NotFound`: the database or document does not exist.
/// - `Error::Unauthorized`: the client lacks permission to read the document.
pub struct ReadDocument<'a, P> {
    transport: &'a Transport,
    doc_path: P,
    revision: Option<&'a Revision>,
    attachment_content: Option<AttachmentContent>,
}

/// Which attachments the server should send content for
///
/// Abstracts the `attachments` query parameter of `GET /db/doc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentContent {
    /// Send stubs for all attachments
    None,
    /// Send content for all attachments
    All,
}

impl<'a, P: IntoDocumentPath<'a>> ReadDocument<'a, P> {
    pub(crate) fn new(transport: &'a Transport, doc_path: P) -> Self {
        Self {
            transport,
            doc_path,
            revision: None,
            attachment_content: None,
        }
    }

    /// Reads the given revision instead of the latest one
    pub fn with_revision(mut self, revision: &'a Revision) -> Self {
        self.revision = Some(revision);
        self
    }

    /// Retrieves (or explicitly does not retrieve) attachment content
    pub fn with_attachment_content(mut self, attachment_content: AttachmentContent) -> Self {
        self.attachment_content = Some(attachment_content);
        self
    }

    /// Executes the action and waits for the result
    pub async fn run(self) -> Result<Document> {
        let transport = self.transport;
        transport.exec(self).await
    }
}

impl<'a, P: IntoDocumentPath<'a>> Action for ReadDocument<'a, P> {
    type Output = Document;
    type State = DatabaseName;

    fn make_request(self) -> Result<(Request, Self::State)> {
        let options = RequestOptions::new().with_accept_json();

        let options = match self.attachment_content {
            None => options,
            Some(AttachmentContent::None) => options.with_attachments_query(false),
            Some(AttachmentContent::All) => options.with_attachments_query(true),
        };

        let options = match self.revision {
            None => options,
            Some(rev) => options.with_revision_query(rev),
        };

        let doc_path = self.doc_path.into_document_path()?;
        let db_name = doc_path.database_name().to_owned_name();
        let request = Request::new(Method::GET, doc_path.iter(), options);
        Ok((request, db_name))
    }

    fn take_response(response: Response, db_name: Self::State) -> Result<Self::Output> {
        match response.status() {
            StatusCode::OK => Document::from_json(db_name, response.decode_json_body()?),
            StatusCode::BAD_REQUEST => Err(Error::bad_request(response)),
            StatusCode::UNAUTHORIZED => Err(Error::unauthorized(response)),
            StatusCode::NOT_FOUND => Err(Error::not_found(response)),
            _ => Err(Error::server_response(response)),
        }
    }
}

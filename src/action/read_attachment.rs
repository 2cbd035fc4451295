//! Defines an action for reading an attachment's content from the CouchDB server.

use super::Action;
use crate::errors::{Error, Result};
use crate::paths::IntoAttachmentPath;
use crate::revision::Revision;
use crate::transport::{Method, Request, RequestOptions, Response, StatusCode, Transport};
use bytes::Bytes;

/// Admits any attachment content type while letting error bodies come back as JSON
const ACCEPT: &str = "application/json, */*";

/// Reads one attachment's raw content
///
/// Sends `GET /db/doc/att`. The body is returned as is, without any JSON
/// decoding.
///
/// # Errors
///
/// - `Error::NotFound`: the database, document or attachment does not exist.
/// - `Error::Unauthorized`: the client lacks permission to read the document.
pub struct ReadAttachment<'a, P> {
    transport: &'a Transport,
    att_path: P,
    revision: Option<&'a Revision>,
}

/// Content of an attachment as served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentBody {
    content_type: Option<String>,
    content: Bytes,
}

impl AttachmentBody {
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn into_content(self) -> Bytes {
        self.content
    }
}

impl<'a, P: IntoAttachmentPath<'a>> ReadAttachment<'a, P> {
    pub(crate) fn new(transport: &'a Transport, att_path: P) -> Self {
        Self {
            transport,
            att_path,
            revision: None,
        }
    }

    /// Reads the attachment as of the given document revision
    pub fn with_revision(mut self, revision: &'a Revision) -> Self {
        self.revision = Some(revision);
        self
    }

    /// Executes the action and waits for the result
    pub async fn run(self) -> Result<AttachmentBody> {
        let transport = self.transport;
        transport.exec(self).await
    }
}

impl<'a, P: IntoAttachmentPath<'a>> Action for ReadAttachment<'a, P> {
    type Output = AttachmentBody;
    type State = ();

    fn make_request(self) -> Result<(Request, Self::State)> {
        let options = RequestOptions::new().with_accept(ACCEPT);
        let options = match self.revision {
            None => options,
            Some(rev) => options.with_revision_query(rev),
        };
        let att_path = self.att_path.into_attachment_path()?;
        let request = Request::new(Method::GET, att_path.iter(), options);
        Ok((request, ()))
    }

    fn take_response(response: Response, _state: Self::State) -> Result<Self::Output> {
        match response.status() {
            StatusCode::OK => {
                let content_type = response.content_type().map(str::to_string);
                Ok(AttachmentBody {
                    content_type,
                    content: response.into_body(),
                })
            }
            StatusCode::UNAUTHORIZED => Err(Error::unauthorized(response)),
            StatusCode::NOT_FOUND => Err(Error::not_found(response)),
            _ => Err(Error::server_response(response)),
        }
    }
}

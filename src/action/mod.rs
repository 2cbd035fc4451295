//! CouchDB actions
//!
//! An action is a builder for one CouchDB operation. It is split in two halves
//! so each can be tested without a server: [`Action::make_request`] turns the
//! action's typed paths and options into a [`Request`], and
//! [`Action::take_response`] turns the server's [`Response`] into the action's
//! output or an error.

mod create_database;
mod create_document;
mod delete_database;
mod delete_document;
mod execute_view;
mod read_attachment;
mod read_document;
mod update_document;

pub use create_database::CreateDatabase;
pub use create_document::CreateDocument;
pub use delete_database::DeleteDatabase;
pub use delete_document::DeleteDocument;
pub use execute_view::{ExecuteView, ViewResponse, ViewRow};
pub use read_attachment::{AttachmentBody, ReadAttachment};
pub use read_document::{AttachmentContent, ReadDocument};
pub use update_document::UpdateDocument;

use crate::errors::Result;
use crate::transport::{Request, Response};

/// One request/response exchange with the server
pub trait Action {
    /// What the action produces on success
    type Output;
    /// Whatever `make_request` needs to hand over to `take_response`
    type State;

    fn make_request(self) -> Result<(Request, Self::State)>;

    fn take_response(response: Response, state: Self::State) -> Result<Self::Output>;
}

/// `{"ok": true, "id": ..., "rev": ...}`, the reply to document writes
#[derive(Debug, serde::Deserialize)]
pub(crate) struct WriteResponse {
    pub(crate) id: crate::names::DocumentId,
    pub(crate) rev: crate::revision::Revision,
}

//! Documents
//!
//! A [`Document`] is what [`crate::Client::read_document`] returns: the
//! document's path and revision, its attachments, and its content with all
//! CouchDB-reserved (underscore-prefixed) fields removed.

mod attachment;


pub use attachment::{Attachment, SavedAttachment, UnsavedAttachment};

use crate::errors::{Error, Result};
use crate::names::{AttachmentName, DatabaseName, DocumentId};
use crate::paths::DocumentPath;
use crate::revision::Revision;
use attachment::DecodedAttachment;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A document read from the server
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: DocumentPath,
    revision: Revision,
    deleted: bool,
    attachments: HashMap<AttachmentName, Attachment>,
    content: Map<String, Value>,
}

/// Document body as the server encodes it
#[derive(Debug, Deserialize)]
pub(crate) struct DecodedDocument {
    #[serde(rename = "_id")]
    id: DocumentId,
    #[serde(rename = "_rev")]
    rev: Revision,
    #[serde(rename = "_deleted", default)]
    deleted: bool,
    #[serde(rename = "_attachments", default)]
    attachments: HashMap<AttachmentName, DecodedAttachment>,
    #[serde(flatten)]
    content: Map<String, Value>,
}

impl Document {
    pub(crate) fn from_decoded(db_name: DatabaseName, decoded: DecodedDocument) -> Result<Self> {
        let attachments = decoded
            .attachments
            .into_iter()
            .map(|(name, a)| Ok((name, Attachment::Saved(SavedAttachment::from_decoded(a)?))))
            .collect::<Result<HashMap<_, _>>>()?;

        let content = decoded
            .content
            .into_iter()
            .filter(|(key, _)| !key.starts_with('_'))
            .collect();

        Ok(Self {
            path: DocumentPath::new(db_name, decoded.id),
            revision: decoded.rev,
            deleted: decoded.deleted,
            attachments,
            content,
        })
    }

    /// Decode a document body belonging to the given database
    pub fn from_json(db_name: impl Into<DatabaseName>, body: Value) -> Result<Self> {
        let decoded: DecodedDocument = serde_json::from_value(body)?;
        Self::from_decoded(db_name.into(), decoded)
    }

    pub fn path(&self) -> &DocumentPath {
        &self.path
    }

    pub fn id(&self) -> &DocumentId {
        self.path.document_id()
    }

    pub fn database_name(&self) -> &DatabaseName {
        self.path.database_name()
    }

    pub fn revision(&self) -> &Revision {
        &self.revision
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Mark (or unmark) the document as deleted for the next update
    pub fn set_deleted(&mut self, deleted: bool) {
        self.deleted = deleted;
    }

    /// Content as a raw JSON object
    pub fn content(&self) -> &Map<String, Value> {
        &self.content
    }

    /// Decode the content into `T`
    pub fn get_content<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.content.clone()))?)
    }

    /// Replace the content
    ///
    /// The content must serialize to a JSON object.
    pub fn set_content<T: Serialize + ?Sized>(&mut self, content: &T) -> Result<()> {
        match serde_json::to_value(content)? {
            Value::Object(map) => {
                self.content = map;
                Ok(())
            }
            _ => Err(Error::ContentNotAnObject),
        }
    }

    pub fn attachments(&self) -> &HashMap<AttachmentName, Attachment> {
        &self.attachments
    }

    pub fn get_attachment(&self, name: &str) -> Option<&Attachment> {
        self.attachments.get(name)
    }

    /// Add or replace an attachment, uploaded with the next update
    pub fn insert_attachment(
        &mut self,
        name: impl Into<AttachmentName>,
        content_type: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) {
        self.attachments.insert(
            name.into(),
            Attachment::Unsaved(UnsavedAttachment::new(content_type, content)),
        );
    }

    /// Remove an attachment; the next update deletes it on the server
    pub fn remove_attachment(&mut self, name: &str) -> Option<Attachment> {
        self.attachments.remove(name)
    }

    /// The body of a `PUT` that writes this document back to the server
    pub fn to_json_body(&self) -> Value {
        let mut body = self.content.clone();
        body.insert("_id".to_string(), Value::String(self.id().to_string()));
        body.insert(
            "_rev".to_string(),
            Value::String(self.revision.to_string()),
        );
        if self.deleted {
            body.insert("_deleted".to_string(), Value::Bool(true));
        }
        if !self.attachments.is_empty() {
            let attachments = self
                .attachments
                .iter()
                .map(|(name, a)| (name.to_string(), a.to_json()))
                .collect::<Map<_, _>>();
            body.insert("_attachments".to_string(), Value::Object(attachments));
        }
        Value::Object(body)
    }
}

//! Attachment paths

use super::{DocumentPath, DocumentPathRef, path_body, split_database, split_document_id};
use crate::errors::{PathParseError, Result};
use crate::names::{AttachmentName, AttachmentNameRef, DatabaseName, DocumentId};
use std::fmt;

/// Path of a document attachment, e.g. `/baseball/babe_ruth/photo.png`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttachmentPath {
    doc_path: DocumentPath,
    att_name: AttachmentName,
}

/// Borrowed form of [`AttachmentPath`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttachmentPathRef<'a> {
    doc_path: DocumentPathRef<'a>,
    att_name: AttachmentNameRef<'a>,
}

impl AttachmentPath {
    pub fn new(
        db_name: impl Into<DatabaseName>,
        doc_id: impl Into<DocumentId>,
        att_name: impl Into<AttachmentName>,
    ) -> Self {
        Self {
            doc_path: DocumentPath::new(db_name, doc_id),
            att_name: att_name.into(),
        }
    }

    pub fn document_path(&self) -> &DocumentPath {
        &self.doc_path
    }

    pub fn database_name(&self) -> &DatabaseName {
        self.doc_path.database_name()
    }

    pub fn document_id(&self) -> &DocumentId {
        self.doc_path.document_id()
    }

    pub fn attachment_name(&self) -> &AttachmentName {
        &self.att_name
    }

    pub fn as_ref_path(&self) -> AttachmentPathRef<'_> {
        AttachmentPathRef::new(self.doc_path.as_ref_path(), self.att_name.as_ref_name())
    }

    /// URL path segments, not percent-encoded
    pub fn segments(&self) -> Vec<&str> {
        self.as_ref_path().segments()
    }

    /// Iterates over the raw path segments
    pub fn iter(&self) -> std::vec::IntoIter<&str> {
        self.segments().into_iter()
    }
}

impl<'a> AttachmentPathRef<'a> {
    pub fn new(doc_path: DocumentPathRef<'a>, att_name: AttachmentNameRef<'a>) -> Self {
        Self { doc_path, att_name }
    }

    /// Parse a path of the form `/db/doc/name`
    ///
    /// Everything after the document id is the attachment name, so the name
    /// may itself contain slashes: `/db/doc/img/a.png` names attachment
    /// `img/a.png`.
    pub fn parse(path: &'a str) -> Result<Self> {
        let body = path_body(path)?;
        let (db_name, rest) = split_database(path, body)?;
        let (doc_id, tail) = split_document_id(path, rest)?;
        let att_name = tail.ok_or_else(|| PathParseError::TooFewSegments(path.to_string()))?;
        Ok(Self::new(
            DocumentPathRef::new(db_name, doc_id),
            AttachmentNameRef::new(att_name),
        ))
    }

    pub fn document_path(&self) -> DocumentPathRef<'a> {
        self.doc_path
    }

    pub fn attachment_name(&self) -> AttachmentNameRef<'a> {
        self.att_name
    }

    pub fn to_owned_path(&self) -> AttachmentPath {
        AttachmentPath {
            doc_path: self.doc_path.to_owned_path(),
            att_name: self.att_name.to_owned_name(),
        }
    }

    /// URL path segments, not percent-encoded
    ///
    /// The attachment name is always a single segment; a slash inside it is
    /// encoded by the transport.
    pub fn segments(&self) -> Vec<&'a str> {
        let mut segments = self.doc_path.segments();
        segments.push(self.att_name.as_str());
        segments
    }

    pub fn iter(&self) -> std::vec::IntoIter<&'a str> {
        self.segments().into_iter()
    }
}

impl fmt::Display for AttachmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref_path(), f)
    }
}

impl fmt::Display for AttachmentPathRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.doc_path, self.att_name)
    }
}

impl From<AttachmentPathRef<'_>> for AttachmentPath {
    fn from(path: AttachmentPathRef<'_>) -> Self {
        path.to_owned_path()
    }
}

impl<'a> From<&'a AttachmentPath> for AttachmentPathRef<'a> {
    fn from(path: &'a AttachmentPath) -> Self {
        path.as_ref_path()
    }
}

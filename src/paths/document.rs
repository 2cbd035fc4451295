//! Document paths

use super::{path_body, split_database, split_document_id};
use crate::errors::{PathParseError, Result};
use crate::names::{DatabaseName, DatabaseNameRef, DocumentId, DocumentIdRef};
use std::fmt;

/// Path of a document, e.g. `/baseball/babe_ruth` or `/baseball/_local/checkpoint`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentPath {
    db_name: DatabaseName,
    doc_id: DocumentId,
}

/// Borrowed form of [`DocumentPath`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentPathRef<'a> {
    db_name: DatabaseNameRef<'a>,
    doc_id: DocumentIdRef<'a>,
}

impl DocumentPath {
    pub fn new(db_name: impl Into<DatabaseName>, doc_id: impl Into<DocumentId>) -> Self {
        Self {
            db_name: db_name.into(),
            doc_id: doc_id.into(),
        }
    }

    pub fn database_name(&self) -> &DatabaseName {
        &self.db_name
    }

    pub fn document_id(&self) -> &DocumentId {
        &self.doc_id
    }

    pub fn as_ref_path(&self) -> DocumentPathRef<'_> {
        DocumentPathRef::new(self.db_name.as_ref_name(), self.doc_id.as_ref_id())
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

impl<'a> DocumentPathRef<'a> {
    pub fn new(db_name: DatabaseNameRef<'a>, doc_id: DocumentIdRef<'a>) -> Self {
        Self { db_name, doc_id }
    }

    /// Parse a path of the form `/db/doc`, `/db/_local/doc` or `/db/_design/ddoc`
    pub fn parse(path: &'a str) -> Result<Self> {
        let body = path_body(path)?;
        let (db_name, rest) = split_database(path, body)?;
        let (doc_id, tail) = split_document_id(path, rest)?;
        if tail.is_some() {
            return Err(PathParseError::TooManySegments(path.to_string()).into());
        }
        Ok(Self::new(db_name, doc_id))
    }

    pub fn database_name(&self) -> DatabaseNameRef<'a> {
        self.db_name
    }

    pub fn document_id(&self) -> DocumentIdRef<'a> {
        self.doc_id
    }

    pub fn to_owned_path(&self) -> DocumentPath {
        DocumentPath {
            db_name: self.db_name.to_owned_name(),
            doc_id: self.doc_id.to_owned_id(),
        }
    }

    /// URL path segments, not percent-encoded
    pub fn segments(&self) -> Vec<&'a str> {
        let mut segments = vec![self.db_name.as_str()];
        segments.extend(self.doc_id.url_segments());
        segments
    }

    pub fn iter(&self) -> std::vec::IntoIter<&'a str> {
        self.segments().into_iter()
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref_path(), f)
    }
}

impl fmt::Display for DocumentPathRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.db_name, self.doc_id)
    }
}

impl From<DocumentPathRef<'_>> for DocumentPath {
    fn from(path: DocumentPathRef<'_>) -> Self {
        path.to_owned_path()
    }
}

impl<'a> From<&'a DocumentPath> for DocumentPathRef<'a> {
    fn from(path: &'a DocumentPath) -> Self {
        path.as_ref_path()
    }
}

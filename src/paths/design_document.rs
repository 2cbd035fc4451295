//! Design document paths

use super::{DocumentPathRef, exact_segments, expect_segment, path_body};
use crate::errors::Result;
use crate::names::{
    DESIGN_PREFIX, DatabaseName, DatabaseNameRef, DesignDocumentName, DesignDocumentNameRef,
    DocumentIdRef,
};
use std::fmt;

/// Path of a design document, e.g. `/baseball/_design/stats`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DesignDocumentPath {
    db_name: DatabaseName,
    ddoc_name: DesignDocumentName,
}

/// Borrowed form of [`DesignDocumentPath`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DesignDocumentPathRef<'a> {
    db_name: DatabaseNameRef<'a>,
    ddoc_name: DesignDocumentNameRef<'a>,
}

impl DesignDocumentPath {
    pub fn new(
        db_name: impl Into<DatabaseName>,
        ddoc_name: impl Into<DesignDocumentName>,
    ) -> Self {
        Self {
            db_name: db_name.into(),
            ddoc_name: ddoc_name.into(),
        }
    }

    pub fn database_name(&self) -> &DatabaseName {
        &self.db_name
    }

    pub fn design_document_name(&self) -> &DesignDocumentName {
        &self.ddoc_name
    }

    pub fn as_ref_path(&self) -> DesignDocumentPathRef<'_> {
        DesignDocumentPathRef::new(self.db_name.as_ref_name(), self.ddoc_name.as_ref_name())
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

impl<'a> DesignDocumentPathRef<'a> {
    pub fn new(db_name: DatabaseNameRef<'a>, ddoc_name: DesignDocumentNameRef<'a>) -> Self {
        Self { db_name, ddoc_name }
    }

    /// Parse a path of the form `/db/_design/ddoc`
    pub fn parse(path: &'a str) -> Result<Self> {
        let body = path_body(path)?;
        let [db_name, prefix, ddoc_name] = exact_segments::<3>(path, body)?;
        expect_segment(path, prefix, DESIGN_PREFIX)?;
        Ok(Self::new(
            DatabaseNameRef::new(db_name),
            DesignDocumentNameRef::new(ddoc_name),
        ))
    }

    pub fn database_name(&self) -> DatabaseNameRef<'a> {
        self.db_name
    }

    pub fn design_document_name(&self) -> DesignDocumentNameRef<'a> {
        self.ddoc_name
    }

    /// The same resource addressed as a document
    pub fn document_path(&self) -> DocumentPathRef<'a> {
        DocumentPathRef::new(self.db_name, DocumentIdRef::Design(self.ddoc_name))
    }

    pub fn to_owned_path(&self) -> DesignDocumentPath {
        DesignDocumentPath {
            db_name: self.db_name.to_owned_name(),
            ddoc_name: self.ddoc_name.to_owned_name(),
        }
    }

    /// URL path segments, not percent-encoded
    pub fn segments(&self) -> Vec<&'a str> {
        vec![self.db_name.as_str(), DESIGN_PREFIX, self.ddoc_name.as_str()]
    }

    pub fn iter(&self) -> std::vec::IntoIter<&'a str> {
        self.segments().into_iter()
    }
}

impl fmt::Display for DesignDocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref_path(), f)
    }
}

impl fmt::Display for DesignDocumentPathRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}/{}", self.db_name, DESIGN_PREFIX, self.ddoc_name)
    }
}

impl From<DesignDocumentPathRef<'_>> for DesignDocumentPath {
    fn from(path: DesignDocumentPathRef<'_>) -> Self {
        path.to_owned_path()
    }
}

impl<'a> From<&'a DesignDocumentPath> for DesignDocumentPathRef<'a> {
    fn from(path: &'a DesignDocumentPath) -> Self {
        path.as_ref_path()
    }
}

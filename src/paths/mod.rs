//! Paths addressing CouchDB resources
//!
//! A path is rooted at a database and names one resource within it. Paths come
//! in owned and reference forms, mirroring [`crate::names`]. The `Into*Path`
//! traits let client methods accept a path string (`"/db/doc"`), a tuple
//! (`("/db", "doc")`) or an already-typed path. The first element of a tuple
//! is itself a database path, so it is a `/db` string, a `DatabaseName` or a
//! `DatabasePath`; the remaining elements are names and are never parsed.
//!
//! String paths use the canonical form CouchDB itself uses, without percent
//! encoding:
//!
//! | Resource | Form |
//! |---|---|
//! | database | `/db` |
//! | document | `/db/doc`, `/db/_local/doc`, `/db/_design/ddoc` |
//! | design document | `/db/_design/ddoc` |
//! | view | `/db/_design/ddoc/_view/view` |
//! | attachment | `/db/doc/name`, where the name may contain `/` |
//!
//! Names that contain a slash cannot be expressed as path strings and must be
//! given as tuple elements (or, for a database, as a `DatabaseName`) instead.

mod attachment;
mod database;
mod design_document;
mod document;
mod view;


pub use attachment::{AttachmentPath, AttachmentPathRef};
pub use database::{DatabasePath, DatabasePathRef};
pub use design_document::{DesignDocumentPath, DesignDocumentPathRef};
pub use document::{DocumentPath, DocumentPathRef};
pub use view::{ViewPath, ViewPathRef};

use crate::errors::{PathParseError, Result};
use crate::names::{
    AttachmentNameRef, DESIGN_PREFIX, DatabaseNameRef, DesignDocumentNameRef, DocumentIdRef,
    LOCAL_PREFIX, LocalDocumentNameRef, NormalDocumentNameRef, ViewNameRef,
};

/// Conversion into a database path
pub trait IntoDatabasePath<'a> {
    fn into_database_path(self) -> Result<DatabasePathRef<'a>>;
}

/// Conversion into a document path
pub trait IntoDocumentPath<'a> {
    fn into_document_path(self) -> Result<DocumentPathRef<'a>>;
}

/// Conversion into a design document path
pub trait IntoDesignDocumentPath<'a> {
    fn into_design_document_path(self) -> Result<DesignDocumentPathRef<'a>>;
}

/// Conversion into a view path
pub trait IntoViewPath<'a> {
    fn into_view_path(self) -> Result<ViewPathRef<'a>>;
}

/// Conversion into an attachment path
pub trait IntoAttachmentPath<'a> {
    fn into_attachment_path(self) -> Result<AttachmentPathRef<'a>>;
}

/// Checks the rules every path string obeys and returns what follows the
/// leading slash.
fn path_body(path: &str) -> std::result::Result<&str, PathParseError> {
    let body = path
        .strip_prefix('/')
        .ok_or_else(|| PathParseError::NoLeadingSlash(path.to_string()))?;

    if body.is_empty() {
        return Err(PathParseError::TooFewSegments(path.to_string()));
    }
    if body.ends_with('/') {
        return Err(PathParseError::TrailingSlash(path.to_string()));
    }
    if body.split('/').any(str::is_empty) {
        return Err(PathParseError::EmptySegment(path.to_string()));
    }

    Ok(body)
}

fn split_first(s: &str) -> (&str, Option<&str>) {
    match s.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (s, None),
    }
}

/// Splits the database name off a checked path body.
fn split_database<'a>(
    path: &str,
    body: &'a str,
) -> std::result::Result<(DatabaseNameRef<'a>, &'a str), PathParseError> {
    match split_first(body) {
        (db_name, Some(rest)) => Ok((DatabaseNameRef::new(db_name), rest)),
        (_, None) => Err(PathParseError::TooFewSegments(path.to_string())),
    }
}

/// Splits a document id (one segment, or a prefix segment and a name) off the
/// front of `rest`.
fn split_document_id<'a>(
    path: &str,
    rest: &'a str,
) -> std::result::Result<(DocumentIdRef<'a>, Option<&'a str>), PathParseError> {
    let (first, tail) = split_first(rest);

    if first == DESIGN_PREFIX || first == LOCAL_PREFIX {
        let tail = tail.ok_or_else(|| PathParseError::TooFewSegments(path.to_string()))?;
        let (name, tail) = split_first(tail);
        let doc_id = if first == DESIGN_PREFIX {
            DocumentIdRef::Design(DesignDocumentNameRef::new(name))
        } else {
            DocumentIdRef::Local(LocalDocumentNameRef::new(name))
        };
        return Ok((doc_id, tail));
    }

    Ok((DocumentIdRef::Normal(NormalDocumentNameRef::new(first)), tail))
}

/// Splits a checked path body into exactly `N` segments.
fn exact_segments<'a, const N: usize>(
    path: &str,
    body: &'a str,
) -> std::result::Result<[&'a str; N], PathParseError> {
    let segments: Vec<&str> = body.split('/').collect();
    if segments.len() < N {
        return Err(PathParseError::TooFewSegments(path.to_string()));
    }
    segments
        .try_into()
        .map_err(|_| PathParseError::TooManySegments(path.to_string()))
}

fn expect_segment(
    path: &str,
    got: &str,
    expected: &'static str,
) -> std::result::Result<(), PathParseError> {
    if got == expected {
        Ok(())
    } else {
        Err(PathParseError::BadSegment {
            path: path.to_string(),
            expected,
            got: got.to_string(),
        })
    }
}

impl<'a> IntoDatabasePath<'a> for &'a str {
    fn into_database_path(self) -> Result<DatabasePathRef<'a>> {
        DatabasePathRef::parse(self)
    }
}

impl<'a> IntoDatabasePath<'a> for &'a String {
    fn into_database_path(self) -> Result<DatabasePathRef<'a>> {
        DatabasePathRef::parse(self)
    }
}

impl<'a> IntoDatabasePath<'a> for DatabasePathRef<'a> {
    fn into_database_path(self) -> Result<DatabasePathRef<'a>> {
        Ok(self)
    }
}

impl<'a> IntoDatabasePath<'a> for &'a DatabasePath {
    fn into_database_path(self) -> Result<DatabasePathRef<'a>> {
        Ok(self.as_ref_path())
    }
}

impl<'a> IntoDatabasePath<'a> for DatabaseNameRef<'a> {
    fn into_database_path(self) -> Result<DatabasePathRef<'a>> {
        Ok(DatabasePathRef::new(self))
    }
}

impl<'a> IntoDatabasePath<'a> for &'a crate::names::DatabaseName {
    fn into_database_path(self) -> Result<DatabasePathRef<'a>> {
        Ok(DatabasePathRef::new(self.as_ref_name()))
    }
}

impl<'a> IntoDocumentPath<'a> for &'a str {
    fn into_document_path(self) -> Result<DocumentPathRef<'a>> {
        DocumentPathRef::parse(self)
    }
}

impl<'a> IntoDocumentPath<'a> for &'a String {
    fn into_document_path(self) -> Result<DocumentPathRef<'a>> {
        DocumentPathRef::parse(self)
    }
}

impl<'a> IntoDocumentPath<'a> for DocumentPathRef<'a> {
    fn into_document_path(self) -> Result<DocumentPathRef<'a>> {
        Ok(self)
    }
}

impl<'a> IntoDocumentPath<'a> for &'a DocumentPath {
    fn into_document_path(self) -> Result<DocumentPathRef<'a>> {
        Ok(self.as_ref_path())
    }
}

impl<'a> IntoDocumentPath<'a> for DesignDocumentPathRef<'a> {
    fn into_document_path(self) -> Result<DocumentPathRef<'a>> {
        Ok(self.document_path())
    }
}

impl<'a> IntoDocumentPath<'a> for &'a DesignDocumentPath {
    fn into_document_path(self) -> Result<DocumentPathRef<'a>> {
        Ok(self.as_ref_path().document_path())
    }
}

/// A database path of any accepted form plus a document id.
impl<'a, D, I> IntoDocumentPath<'a> for (D, I)
where
    D: IntoDatabasePath<'a>,
    I: Into<DocumentIdRef<'a>>,
{
    fn into_document_path(self) -> Result<DocumentPathRef<'a>> {
        let db_path = self.0.into_database_path()?;
        Ok(DocumentPathRef::new(db_path.database_name(), self.1.into()))
    }
}

impl<'a> IntoDesignDocumentPath<'a> for &'a str {
    fn into_design_document_path(self) -> Result<DesignDocumentPathRef<'a>> {
        DesignDocumentPathRef::parse(self)
    }
}

impl<'a> IntoDesignDocumentPath<'a> for &'a String {
    fn into_design_document_path(self) -> Result<DesignDocumentPathRef<'a>> {
        DesignDocumentPathRef::parse(self)
    }
}

impl<'a> IntoDesignDocumentPath<'a> for DesignDocumentPathRef<'a> {
    fn into_design_document_path(self) -> Result<DesignDocumentPathRef<'a>> {
        Ok(self)
    }
}

impl<'a> IntoDesignDocumentPath<'a> for &'a DesignDocumentPath {
    fn into_design_document_path(self) -> Result<DesignDocumentPathRef<'a>> {
        Ok(self.as_ref_path())
    }
}

impl<'a, D, N> IntoDesignDocumentPath<'a> for (D, N)
where
    D: IntoDatabasePath<'a>,
    N: Into<DesignDocumentNameRef<'a>>,
{
    fn into_design_document_path(self) -> Result<DesignDocumentPathRef<'a>> {
        let db_path = self.0.into_database_path()?;
        Ok(DesignDocumentPathRef::new(db_path.database_name(), self.1.into()))
    }
}

impl<'a> IntoViewPath<'a> for &'a str {
    fn into_view_path(self) -> Result<ViewPathRef<'a>> {
        ViewPathRef::parse(self)
    }
}

impl<'a> IntoViewPath<'a> for &'a String {
    fn into_view_path(self) -> Result<ViewPathRef<'a>> {
        ViewPathRef::parse(self)
    }
}

impl<'a> IntoViewPath<'a> for ViewPathRef<'a> {
    fn into_view_path(self) -> Result<ViewPathRef<'a>> {
        Ok(self)
    }
}

impl<'a> IntoViewPath<'a> for &'a ViewPath {
    fn into_view_path(self) -> Result<ViewPathRef<'a>> {
        Ok(self.as_ref_path())
    }
}

impl<'a, D, N, V> IntoViewPath<'a> for (D, N, V)
where
    D: IntoDatabasePath<'a>,
    N: Into<DesignDocumentNameRef<'a>>,
    V: Into<ViewNameRef<'a>>,
{
    fn into_view_path(self) -> Result<ViewPathRef<'a>> {
        let db_path = self.0.into_database_path()?;
        Ok(ViewPathRef::new(
            db_path.database_name(),
            self.1.into(),
            self.2.into(),
        ))
    }
}

impl<'a> IntoAttachmentPath<'a> for &'a str {
    fn into_attachment_path(self) -> Result<AttachmentPathRef<'a>> {
        AttachmentPathRef::parse(self)
    }
}

impl<'a> IntoAttachmentPath<'a> for &'a String {
    fn into_attachment_path(self) -> Result<AttachmentPathRef<'a>> {
        AttachmentPathRef::parse(self)
    }
}

impl<'a> IntoAttachmentPath<'a> for AttachmentPathRef<'a> {
    fn into_attachment_path(self) -> Result<AttachmentPathRef<'a>> {
        Ok(self)
    }
}

impl<'a> IntoAttachmentPath<'a> for &'a AttachmentPath {
    fn into_attachment_path(self) -> Result<AttachmentPathRef<'a>> {
        Ok(self.as_ref_path())
    }
}

/// A document path of any accepted form plus an attachment name.
impl<'a, P, A> IntoAttachmentPath<'a> for (P, A)
where
    P: IntoDocumentPath<'a>,
    A: Into<AttachmentNameRef<'a>>,
{
    fn into_attachment_path(self) -> Result<AttachmentPathRef<'a>> {
        Ok(AttachmentPathRef::new(
            self.0.into_document_path()?,
            self.1.into(),
        ))
    }
}

impl<'a, D, I, A> IntoAttachmentPath<'a> for (D, I, A)
where
    D: IntoDatabasePath<'a>,
    I: Into<DocumentIdRef<'a>>,
    A: Into<AttachmentNameRef<'a>>,
{
    fn into_attachment_path(self) -> Result<AttachmentPathRef<'a>> {
        let db_path = self.0.into_database_path()?;
        Ok(AttachmentPathRef::new(
            DocumentPathRef::new(db_path.database_name(), self.1.into()),
            self.2.into(),
        ))
    }
}

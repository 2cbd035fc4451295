//! View paths

use super::{DesignDocumentPathRef, exact_segments, expect_segment, path_body};
use crate::errors::Result;
use crate::names::{
    DESIGN_PREFIX, DatabaseName, DatabaseNameRef, DesignDocumentName, DesignDocumentNameRef,
    VIEW_PREFIX, ViewName, ViewNameRef,
};
use std::fmt;

/// Path of a view, e.g. `/baseball/_design/stats/_view/by_team`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewPath {
    db_name: DatabaseName,
    ddoc_name: DesignDocumentName,
    view_name: ViewName,
}

/// Borrowed form of [`ViewPath`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewPathRef<'a> {
    db_name: DatabaseNameRef<'a>,
    ddoc_name: DesignDocumentNameRef<'a>,
    view_name: ViewNameRef<'a>,
}

impl ViewPath {
    pub fn new(
        db_name: impl Into<DatabaseName>,
        ddoc_name: impl Into<DesignDocumentName>,
        view_name: impl Into<ViewName>,
    ) -> Self {
        Self {
            db_name: db_name.into(),
            ddoc_name: ddoc_name.into(),
            view_name: view_name.into(),
        }
    }

    pub fn database_name(&self) -> &DatabaseName {
        &self.db_name
    }

    pub fn design_document_name(&self) -> &DesignDocumentName {
        &self.ddoc_name
    }

    pub fn view_name(&self) -> &ViewName {
        &self.view_name
    }

    pub fn as_ref_path(&self) -> ViewPathRef<'_> {
        ViewPathRef::new(
            self.db_name.as_ref_name(),
            self.ddoc_name.as_ref_name(),
            self.view_name.as_ref_name(),
        )
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

impl<'a> ViewPathRef<'a> {
    pub fn new(
        db_name: DatabaseNameRef<'a>,
        ddoc_name: DesignDocumentNameRef<'a>,
        view_name: ViewNameRef<'a>,
    ) -> Self {
        Self {
            db_name,
            ddoc_name,
            view_name,
        }
    }

    /// Parse a path of the form `/db/_design/ddoc/_view/view`
    pub fn parse(path: &'a str) -> Result<Self> {
        let body = path_body(path)?;
        let [db_name, design, ddoc_name, view, view_name] = exact_segments::<5>(path, body)?;
        expect_segment(path, design, DESIGN_PREFIX)?;
        expect_segment(path, view, VIEW_PREFIX)?;
        Ok(Self::new(
            DatabaseNameRef::new(db_name),
            DesignDocumentNameRef::new(ddoc_name),
            ViewNameRef::new(view_name),
        ))
    }

    pub fn database_name(&self) -> DatabaseNameRef<'a> {
        self.db_name
    }

    pub fn design_document_name(&self) -> DesignDocumentNameRef<'a> {
        self.ddoc_name
    }

    pub fn view_name(&self) -> ViewNameRef<'a> {
        self.view_name
    }

    /// Path of the design document defining this view
    pub fn design_document_path(&self) -> DesignDocumentPathRef<'a> {
        DesignDocumentPathRef::new(self.db_name, self.ddoc_name)
    }

    pub fn to_owned_path(&self) -> ViewPath {
        ViewPath {
            db_name: self.db_name.to_owned_name(),
            ddoc_name: self.ddoc_name.to_owned_name(),
            view_name: self.view_name.to_owned_name(),
        }
    }

    /// URL path segments, not percent-encoded
    pub fn segments(&self) -> Vec<&'a str> {
        vec![
            self.db_name.as_str(),
            DESIGN_PREFIX,
            self.ddoc_name.as_str(),
            VIEW_PREFIX,
            self.view_name.as_str(),
        ]
    }

    pub fn iter(&self) -> std::vec::IntoIter<&'a str> {
        self.segments().into_iter()
    }
}

impl fmt::Display for ViewPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref_path(), f)
    }
}

impl fmt::Display for ViewPathRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{}/{}/{}/{}/{}",
            self.db_name, DESIGN_PREFIX, self.ddoc_name, VIEW_PREFIX, self.view_name
        )
    }
}

impl From<ViewPathRef<'_>> for ViewPath {
    fn from(path: ViewPathRef<'_>) -> Self {
        path.to_owned_path()
    }
}

impl<'a> From<&'a ViewPath> for ViewPathRef<'a> {
    fn from(path: &'a ViewPath) -> Self {
        path.as_ref_path()
    }
}

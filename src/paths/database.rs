//! Database paths

use super::{exact_segments, path_body};
use crate::errors::Result;
use crate::names::{DatabaseName, DatabaseNameRef};
use std::fmt;

/// Path of a database, e.g. `/baseball`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatabasePath {
    db_name: DatabaseName,
}

/// Borrowed form of [`DatabasePath`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatabasePathRef<'a> {
    db_name: DatabaseNameRef<'a>,
}

impl DatabasePath {
    pub fn new(db_name: impl Into<DatabaseName>) -> Self {
        Self {
            db_name: db_name.into(),
        }
    }

    pub fn database_name(&self) -> &DatabaseName {
        &self.db_name
    }

    pub fn as_ref_path(&self) -> DatabasePathRef<'_> {
        DatabasePathRef::new(self.db_name.as_ref_name())
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

impl<'a> DatabasePathRef<'a> {
    pub fn new(db_name: DatabaseNameRef<'a>) -> Self {
        Self { db_name }
    }

    /// Parse a path of the form `/db`
    pub fn parse(path: &'a str) -> Result<Self> {
        let body = path_body(path)?;
        let [db_name] = exact_segments::<1>(path, body)?;
        Ok(Self::new(DatabaseNameRef::new(db_name)))
    }

    pub fn database_name(&self) -> DatabaseNameRef<'a> {
        self.db_name
    }

    pub fn to_owned_path(&self) -> DatabasePath {
        DatabasePath {
            db_name: self.db_name.to_owned_name(),
        }
    }

    /// URL path segments, not percent-encoded
    pub fn segments(&self) -> Vec<&'a str> {
        vec![self.db_name.as_str()]
    }

    pub fn iter(&self) -> std::vec::IntoIter<&'a str> {
        self.segments().into_iter()
    }
}

impl fmt::Display for DatabasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref_path(), f)
    }
}

impl fmt::Display for DatabasePathRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.db_name)
    }
}

impl From<DatabasePathRef<'_>> for DatabasePath {
    fn from(path: DatabasePathRef<'_>) -> Self {
        path.to_owned_path()
    }
}

impl<'a> From<&'a DatabasePath> for DatabasePathRef<'a> {
    fn from(path: &'a DatabasePath) -> Self {
        path.as_ref_path()
    }
}

impl From<DatabaseName> for DatabasePath {
    fn from(db_name: DatabaseName) -> Self {
        Self { db_name }
    }
}

//! Document identity

use super::{
    DESIGN_PREFIX, DesignDocumentName, DesignDocumentNameRef, LOCAL_PREFIX, LocalDocumentName,
    LocalDocumentNameRef, NormalDocumentName, NormalDocumentNameRef,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a document within a database
///
/// CouchDB distinguishes documents by their id prefix: ids beginning with
/// `_design/` name design documents, ids beginning with `_local/` name local
/// documents, and every other id names a normal document. The variants hold
/// the name with the prefix removed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentId {
    Normal(NormalDocumentName),
    Local(LocalDocumentName),
    Design(DesignDocumentName),
}

/// Borrowed form of [`DocumentId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentIdRef<'a> {
    Normal(NormalDocumentNameRef<'a>),
    Local(LocalDocumentNameRef<'a>),
    Design(DesignDocumentNameRef<'a>),
}

/// Strips `prefix` followed by a slash; `_designfoo` is not a design id.
fn strip_id_prefix<'a>(id: &'a str, prefix: &str) -> Option<&'a str> {
    id.strip_prefix(prefix)?.strip_prefix('/')
}

impl DocumentId {
    pub fn is_normal(&self) -> bool {
        matches!(self, DocumentId::Normal(_))
    }

    pub fn is_local(&self) -> bool {
        matches!(self, DocumentId::Local(_))
    }

    pub fn is_design(&self) -> bool {
        matches!(self, DocumentId::Design(_))
    }

    /// Borrow this id
    pub fn as_ref_id(&self) -> DocumentIdRef<'_> {
        match self {
            DocumentId::Normal(name) => DocumentIdRef::Normal(name.as_ref_name()),
            DocumentId::Local(name) => DocumentIdRef::Local(name.as_ref_name()),
            DocumentId::Design(name) => DocumentIdRef::Design(name.as_ref_name()),
        }
    }

    /// URL path segments addressing this document within its database
    pub fn url_segments(&self) -> Vec<&str> {
        self.as_ref_id().url_segments()
    }
}

impl<'a> DocumentIdRef<'a> {
    pub fn is_normal(&self) -> bool {
        matches!(self, DocumentIdRef::Normal(_))
    }

    pub fn is_local(&self) -> bool {
        matches!(self, DocumentIdRef::Local(_))
    }

    pub fn is_design(&self) -> bool {
        matches!(self, DocumentIdRef::Design(_))
    }

    /// Copy this id into an owned id
    pub fn to_owned_id(&self) -> DocumentId {
        match *self {
            DocumentIdRef::Normal(name) => DocumentId::Normal(name.to_owned_name()),
            DocumentIdRef::Local(name) => DocumentId::Local(name.to_owned_name()),
            DocumentIdRef::Design(name) => DocumentId::Design(name.to_owned_name()),
        }
    }

    /// The name with any prefix removed
    pub fn name(&self) -> &'a str {
        match *self {
            DocumentIdRef::Normal(name) => name.as_str(),
            DocumentIdRef::Local(name) => name.as_str(),
            DocumentIdRef::Design(name) => name.as_str(),
        }
    }

    /// URL path segments addressing this document within its database
    pub fn url_segments(&self) -> Vec<&'a str> {
        match *self {
            DocumentIdRef::Normal(name) => vec![name.as_str()],
            DocumentIdRef::Local(name) => vec![LOCAL_PREFIX, name.as_str()],
            DocumentIdRef::Design(name) => vec![DESIGN_PREFIX, name.as_str()],
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref_id(), f)
    }
}

impl fmt::Display for DocumentIdRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentIdRef::Normal(name) => write!(f, "{}", name),
            DocumentIdRef::Local(name) => write!(f, "{}/{}", LOCAL_PREFIX, name),
            DocumentIdRef::Design(name) => write!(f, "{}/{}", DESIGN_PREFIX, name),
        }
    }
}

impl<'a> From<&'a str> for DocumentIdRef<'a> {
    fn from(id: &'a str) -> Self {
        if let Some(name) = strip_id_prefix(id, DESIGN_PREFIX) {
            DocumentIdRef::Design(DesignDocumentNameRef::new(name))
        } else if let Some(name) = strip_id_prefix(id, LOCAL_PREFIX) {
            DocumentIdRef::Local(LocalDocumentNameRef::new(name))
        } else {
            DocumentIdRef::Normal(NormalDocumentNameRef::new(id))
        }
    }
}

impl<'a> From<&'a String> for DocumentIdRef<'a> {
    fn from(id: &'a String) -> Self {
        DocumentIdRef::from(id.as_str())
    }
}

impl<'a> From<&'a DocumentId> for DocumentIdRef<'a> {
    fn from(id: &'a DocumentId) -> Self {
        id.as_ref_id()
    }
}

impl<'a> From<NormalDocumentNameRef<'a>> for DocumentIdRef<'a> {
    fn from(name: NormalDocumentNameRef<'a>) -> Self {
        DocumentIdRef::Normal(name)
    }
}

impl<'a> From<LocalDocumentNameRef<'a>> for DocumentIdRef<'a> {
    fn from(name: LocalDocumentNameRef<'a>) -> Self {
        DocumentIdRef::Local(name)
    }
}

impl<'a> From<DesignDocumentNameRef<'a>> for DocumentIdRef<'a> {
    fn from(name: DesignDocumentNameRef<'a>) -> Self {
        DocumentIdRef::Design(name)
    }
}

impl<'a> From<&'a NormalDocumentName> for DocumentIdRef<'a> {
    fn from(name: &'a NormalDocumentName) -> Self {
        DocumentIdRef::Normal(name.as_ref_name())
    }
}

impl<'a> From<&'a LocalDocumentName> for DocumentIdRef<'a> {
    fn from(name: &'a LocalDocumentName) -> Self {
        DocumentIdRef::Local(name.as_ref_name())
    }
}

impl<'a> From<&'a DesignDocumentName> for DocumentIdRef<'a> {
    fn from(name: &'a DesignDocumentName) -> Self {
        DocumentIdRef::Design(name.as_ref_name())
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentIdRef::from(id).to_owned_id()
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        DocumentId::from(id.as_str())
    }
}

impl From<DocumentIdRef<'_>> for DocumentId {
    fn from(id: DocumentIdRef<'_>) -> Self {
        id.to_owned_id()
    }
}

impl From<NormalDocumentName> for DocumentId {
    fn from(name: NormalDocumentName) -> Self {
        DocumentId::Normal(name)
    }
}

impl From<LocalDocumentName> for DocumentId {
    fn from(name: LocalDocumentName) -> Self {
        DocumentId::Local(name)
    }
}

impl From<DesignDocumentName> for DocumentId {
    fn from(name: DesignDocumentName) -> Self {
        DocumentId::Design(name)
    }
}

impl PartialEq<DocumentIdRef<'_>> for DocumentId {
    fn eq(&self, other: &DocumentIdRef<'_>) -> bool {
        self.as_ref_id() == *other
    }
}

impl PartialEq<DocumentId> for DocumentIdRef<'_> {
    fn eq(&self, other: &DocumentId) -> bool {
        *self == other.as_ref_id()
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(DocumentId::from)
    }
}

//! Names of CouchDB resources
//!
//! Every resource kind has an owned name type, backed by a `String`, and a
//! reference name type, backed by a `&str`. Owned names live in documents and
//! responses; reference names are what paths borrow when built from user input.

mod document_id;


pub use document_id::{DocumentId, DocumentIdRef};

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Path segment preceding the name of a design document
pub const DESIGN_PREFIX: &str = "_design";

/// Path segment preceding the name of a local (non-replicating) document
pub const LOCAL_PREFIX: &str = "_local";

/// Path segment preceding the name of a view within a design document
pub const VIEW_PREFIX: &str = "_view";

macro_rules! define_name_pair {
    (
        $(#[$owned_meta:meta])*
        owned $owned:ident;
        $(#[$ref_meta:meta])*
        borrowed $borrowed:ident;
    ) => {
        $(#[$owned_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $owned(String);

        $(#[$ref_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $borrowed<'a>(&'a str);

        impl $owned {
            /// Create a name
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Borrow this name
            pub fn as_ref_name(&self) -> $borrowed<'_> {
                $borrowed(&self.0)
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl<'a> $borrowed<'a> {
            /// Create a name borrowing the given string
            pub const fn new(name: &'a str) -> Self {
                Self(name)
            }

            pub fn as_str(&self) -> &'a str {
                self.0
            }

            /// Copy this name into an owned name
            pub fn to_owned_name(&self) -> $owned {
                $owned(self.0.to_string())
            }
        }

        impl fmt::Display for $owned {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl fmt::Display for $borrowed<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0)
            }
        }

        impl AsRef<str> for $owned {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $borrowed<'_> {
            fn as_ref(&self) -> &str {
                self.0
            }
        }

        impl Borrow<str> for $owned {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $owned {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $owned {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl From<$borrowed<'_>> for $owned {
            fn from(name: $borrowed<'_>) -> Self {
                name.to_owned_name()
            }
        }

        impl From<$owned> for String {
            fn from(name: $owned) -> Self {
                name.0
            }
        }

        impl<'a> From<&'a str> for $borrowed<'a> {
            fn from(name: &'a str) -> Self {
                Self(name)
            }
        }

        impl<'a> From<&'a String> for $borrowed<'a> {
            fn from(name: &'a String) -> Self {
                Self(name)
            }
        }

        impl<'a> From<&'a $owned> for $borrowed<'a> {
            fn from(name: &'a $owned) -> Self {
                name.as_ref_name()
            }
        }

        impl PartialEq<$borrowed<'_>> for $owned {
            fn eq(&self, other: &$borrowed<'_>) -> bool {
                self.0 == other.0
            }
        }

        impl PartialEq<$owned> for $borrowed<'_> {
            fn eq(&self, other: &$owned) -> bool {
                self.0 == other.0
            }
        }

        impl PartialEq<str> for $owned {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $owned {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<&str> for $borrowed<'_> {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_name_pair! {
    /// Name of a database, e.g. `baseball`
    owned DatabaseName;
    /// Borrowed name of a database
    borrowed DatabaseNameRef;
}

define_name_pair! {
    /// Name of a normal (replicating) document
    owned NormalDocumentName;
    /// Borrowed name of a normal document
    borrowed NormalDocumentNameRef;
}

define_name_pair! {
    /// Name of a local document, without the `_local/` prefix
    owned LocalDocumentName;
    /// Borrowed name of a local document
    borrowed LocalDocumentNameRef;
}

define_name_pair! {
    /// Name of a design document, without the `_design/` prefix
    owned DesignDocumentName;
    /// Borrowed name of a design document
    borrowed DesignDocumentNameRef;
}

define_name_pair! {
    /// Name of a view within a design document
    owned ViewName;
    /// Borrowed name of a view
    borrowed ViewNameRef;
}

define_name_pair! {
    /// Name of a document attachment, e.g. `photo.png`
    owned AttachmentName;
    /// Borrowed name of an attachment
    borrowed AttachmentNameRef;
}

//! Document attachments

use crate::errors::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::{Value, json};

/// An attachment of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    /// Stored on the server as part of the document's current revision
    Saved(SavedAttachment),
    /// Added locally, uploaded with the next update of the document
    Unsaved(UnsavedAttachment),
}

/// An attachment as reported by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAttachment {
    content_type: String,
    length: u64,
    digest: Option<String>,
    revpos: Option<u64>,
    content: Option<Vec<u8>>,
}

/// An attachment waiting to be uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsavedAttachment {
    content_type: String,
    content: Vec<u8>,
}

/// `_attachments` entry as the server encodes it
#[derive(Debug, Deserialize)]
pub(crate) struct DecodedAttachment {
    content_type: String,
    #[serde(default)]
    length: Option<u64>,
    #[serde(default)]
    digest: Option<String>,
    #[serde(default)]
    revpos: Option<u64>,
    #[serde(default)]
    data: Option<String>,
}

impl Attachment {
    pub fn content_type(&self) -> &str {
        match self {
            Attachment::Saved(a) => &a.content_type,
            Attachment::Unsaved(a) => &a.content_type,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Attachment::Saved(_))
    }

    /// Attachment content, if it is known locally
    ///
    /// Saved attachments carry content only when the document was read with
    /// attachment content.
    pub fn content(&self) -> Option<&[u8]> {
        match self {
            Attachment::Saved(a) => a.content.as_deref(),
            Attachment::Unsaved(a) => Some(&a.content),
        }
    }

    /// The `_attachments` entry written back to the server
    pub(crate) fn to_json(&self) -> Value {
        match self {
            Attachment::Saved(_) => json!({ "stub": true }),
            Attachment::Unsaved(a) => json!({
                "content_type": a.content_type,
                "data": STANDARD.encode(&a.content),
            }),
        }
    }
}

impl SavedAttachment {
    pub(crate) fn from_decoded(decoded: DecodedAttachment) -> Result<Self> {
        let content = match decoded.data {
            Some(data) => Some(STANDARD.decode(data)?),
            None => None,
        };
        let length = decoded
            .length
            .or_else(|| content.as_ref().map(|c| c.len() as u64))
            .unwrap_or(0);

        Ok(Self {
            content_type: decoded.content_type,
            length,
            digest: decoded.digest,
            revpos: decoded.revpos,
            content,
        })
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Content length in bytes
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Content digest, e.g. `md5-...`
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// Sequence number of the revision that last changed this attachment
    pub fn revpos(&self) -> Option<u64> {
        self.revpos
    }

    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }
}

impl UnsavedAttachment {
    pub fn new(content_type: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.into(),
            content: content.into(),
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

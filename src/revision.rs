//! Document revisions

use crate::errors::{Result, RevisionParseError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Revision of a document, e.g. `1-967a00dff5e02add41819138abb3284d`
///
/// A revision pairs a sequence number, which counts how many times the document
/// has been written, with a digest of the document's content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision {
    sequence_number: u64,
    digest: String,
}

impl Revision {
    /// Parse a revision string
    pub fn parse(s: &str) -> Result<Self> {
        let (number, digest) = s
            .split_once('-')
            .ok_or_else(|| RevisionParseError::MissingSeparator(s.to_string()))?;

        // Canonical decimal only, so `Display` gives back the parsed text.
        // `0` is valid: the server numbers `_local` document revisions from it.
        let canonical = number == "0" || !number.starts_with('0');
        if number.is_empty() || !canonical || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RevisionParseError::BadSequenceNumber(s.to_string()).into());
        }
        let sequence_number: u64 = number
            .parse()
            .map_err(|_| RevisionParseError::BadSequenceNumber(s.to_string()))?;

        if digest.is_empty() || !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RevisionParseError::BadDigest(s.to_string()).into());
        }

        Ok(Self {
            sequence_number,
            digest: digest.to_string(),
        })
    }

    /// Number of times the document has been written
    ///
    /// Starts at 1 for normal and design documents, at 0 for local documents.
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.sequence_number, self.digest)
    }
}

impl FromStr for Revision {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Revision {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Revision {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Revision::parse(&s).map_err(serde::de::Error::custom)
    }
}

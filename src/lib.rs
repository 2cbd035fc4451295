//! # sofa
//!
//! An async CouchDB client with strongly typed names and paths.
//!
//! ## Features
//!
//! - **Typed names**: databases, documents, design documents, views and
//!   attachments each have their own owned and borrowed name types
//! - **Typed paths**: every resource is addressed by a path that is either
//!   parsed from a string like `/db/_design/ddoc/_view/view` or assembled
//!   from names, with no string concatenation and no double encoding
//! - **Actions**: each CouchDB operation is a builder that runs with `.await`
//! - **Transient failures**: connection errors and `502`/`503`/`504`/`429`
//!   responses are retried with exponential backoff
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sofa::{Client, ClientConfig};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     sofa::logging::init();
//!
//!     let client = Client::new(ClientConfig::from_env()?)?;
//!     client.create_database("/baseball").run().await?;
//!
//!     let content = json!({ "name": "Babe Ruth", "team": "Yankees" });
//!     let (id, rev) = client
//!         .create_document("/baseball", &content)
//!         .with_document_id("babe_ruth")
//!         .run()
//!         .await?;
//!     println!("created {} at {}", id, rev);
//!
//!     let mut doc = client.read_document("/baseball/babe_ruth").run().await?;
//!     doc.set_content(&json!({ "name": "Babe Ruth", "team": "Red Sox" }))?;
//!     client.update_document(&doc).run().await?;
//!
//!     let rows = client
//!         .execute_view(("/baseball", "stats", "by_team"))
//!         .with_include_docs(true)
//!         .run()
//!         .await?;
//!     println!("{} rows", rows.rows().len());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod action;
pub mod client;
pub mod config;
pub mod document;
pub mod errors;
pub mod logging;
pub mod names;
pub mod paths;
pub mod revision;
pub mod transport;

// Re-export main types
pub use client::Client;
pub use config::{ClientConfig, ConfigBuilder, Credentials};
pub use errors::{Error, ErrorResponse, PathParseError, Result, RevisionParseError};

pub use action::{AttachmentBody, AttachmentContent, ViewResponse, ViewRow};
pub use document::{Attachment, Document, SavedAttachment, UnsavedAttachment};
pub use revision::Revision;
pub use transport::{Method, StatusCode};

pub use names::{
    AttachmentName, AttachmentNameRef, DESIGN_PREFIX, DatabaseName, DatabaseNameRef,
    DesignDocumentName, DesignDocumentNameRef, DocumentId, DocumentIdRef, LOCAL_PREFIX,
    LocalDocumentName, LocalDocumentNameRef, NormalDocumentName, NormalDocumentNameRef,
    VIEW_PREFIX, ViewName, ViewNameRef,
};
pub use paths::{
    AttachmentPath, AttachmentPathRef, DatabasePath, DatabasePathRef, DesignDocumentPath,
    DesignDocumentPathRef, DocumentPath, DocumentPathRef, IntoAttachmentPath, IntoDatabasePath,
    IntoDesignDocumentPath, IntoDocumentPath, IntoViewPath, ViewPath, ViewPathRef,
};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Core client implementation

use crate::action::{
    CreateDatabase, CreateDocument, DeleteDatabase, DeleteDocument, ExecuteView, ReadAttachment,
    ReadDocument, UpdateDocument,
};
use crate::config::{ClientConfig, ConfigBuilder};
use crate::document::Document;
use crate::errors::Result;
use crate::paths::{IntoAttachmentPath, IntoDatabasePath, IntoDocumentPath, IntoViewPath};
use crate::revision::Revision;
use crate::transport::Transport;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use url::Url;

/// Handle to one CouchDB server
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<Transport>,
}

impl Client {
    /// Create a client for the configured server
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = Transport::new(&config)?;

        info!(
            "CouchDB client created for {} (auth: {})",
            transport.base_url(),
            if config.credentials.is_some() { "basic" } else { "none" }
        );

        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Create a client with default settings for the server at `server_url`
    pub fn from_url(server_url: &str) -> Result<Self> {
        Self::new(ConfigBuilder::new().server_url(server_url).build())
    }

    /// Create a client from `COUCHDB_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn create_database<'a, P>(&'a self, db_path: P) -> CreateDatabase<'a, P>
    where
        P: IntoDatabasePath<'a>,
    {
        CreateDatabase::new(&self.transport, db_path)
    }

    pub fn delete_database<'a, P>(&'a self, db_path: P) -> DeleteDatabase<'a, P>
    where
        P: IntoDatabasePath<'a>,
    {
        DeleteDatabase::new(&self.transport, db_path)
    }

    /// Create a document from any JSON object-shaped content
    ///
    /// The server assigns the document id unless one is given with
    /// [`CreateDocument::with_document_id`].
    pub fn create_document<'a, P, C>(&'a self, db_path: P, content: &'a C) -> CreateDocument<'a, P, C>
    where
        P: IntoDatabasePath<'a>,
        C: Serialize + ?Sized,
    {
        CreateDocument::new(&self.transport, db_path, content)
    }

    pub fn read_document<'a, P>(&'a self, doc_path: P) -> ReadDocument<'a, P>
    where
        P: IntoDocumentPath<'a>,
    {
        ReadDocument::new(&self.transport, doc_path)
    }

    /// Write back a document previously read and modified
    pub fn update_document<'a>(&'a self, doc: &'a Document) -> UpdateDocument<'a> {
        UpdateDocument::new(&self.transport, doc)
    }

    pub fn delete_document<'a, P>(&'a self, doc_path: P, revision: &'a Revision) -> DeleteDocument<'a, P>
    where
        P: IntoDocumentPath<'a>,
    {
        DeleteDocument::new(&self.transport, doc_path, revision)
    }

    pub fn execute_view<'a, P>(&'a self, view_path: P) -> ExecuteView<'a, P>
    where
        P: IntoViewPath<'a>,
    {
        ExecuteView::new(&self.transport, view_path)
    }

    pub fn read_attachment<'a, P>(&'a self, att_path: P) -> ReadAttachment<'a, P>
    where
        P: IntoAttachmentPath<'a>,
    {
        ReadAttachment::new(&self.transport, att_path)
    }
}

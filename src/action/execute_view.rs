//! Defines an action for executing a view on the CouchDB server.

use super::Action;
use crate::document::Document;
use crate::errors::{Error, Result};
use crate::names::{DatabaseName, DocumentId};
use crate::paths::IntoViewPath;
use crate::transport::{Method, Request, RequestOptions, Response, StatusCode, Transport};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Executes a view and returns its rows
///
/// Sends `GET /db/_design/ddoc/_view/view`. Query options are sent as JSON
/// values, so string keys arrive quoted and numbers arrive bare.
///
/// # Errors
///
/// - `Error::BadRequest`: the server rejected a query option.
/// - `Error::NotFound`: the database, design document or view does not exist.
/// - `Error::Unauthorized`: the client lacks permission to read the view.
pub struct ExecuteView<'a, P> {
    transport: &'a Transport,
    view_path: P,
    options: RequestOptions,
}

impl<'a, P: IntoViewPath<'a>> ExecuteView<'a, P> {
    pub(crate) fn new(transport: &'a Transport, view_path: P) -> Self {
        Self {
            transport,
            view_path,
            options: RequestOptions::new().with_accept_json(),
        }
    }

    fn with_param(mut self, key: &str, value: Value) -> Self {
        self.options = self.options.with_query(key, value.to_string());
        self
    }

    /// Runs (or skips) the view's reduce function
    pub fn with_reduce(self, reduce: bool) -> Self {
        self.with_param("reduce", Value::Bool(reduce))
    }

    /// Groups reduced rows by key
    pub fn with_group(self, group: bool) -> Self {
        self.with_param("group", Value::Bool(group))
    }

    /// Groups reduced rows by the first `level` elements of array keys
    pub fn with_group_level(self, level: u32) -> Self {
        self.with_param("group_level", Value::from(level))
    }

    /// Embeds each row's document
    pub fn with_include_docs(self, include_docs: bool) -> Self {
        self.with_param("include_docs", Value::Bool(include_docs))
    }

    pub fn with_descending(self, descending: bool) -> Self {
        self.with_param("descending", Value::Bool(descending))
    }

    pub fn with_limit(self, limit: u64) -> Self {
        self.with_param("limit", Value::from(limit))
    }

    pub fn with_skip(self, skip: u64) -> Self {
        self.with_param("skip", Value::from(skip))
    }

    /// Starts the result at rows with this key
    pub fn with_start_key(self, key: impl Into<Value>) -> Self {
        self.with_param("startkey", key.into())
    }

    /// Ends the result at rows with this key
    pub fn with_end_key(self, key: impl Into<Value>) -> Self {
        self.with_param("endkey", key.into())
    }

    /// Returns only rows with exactly this key
    pub fn with_key(self, key: impl Into<Value>) -> Self {
        self.with_param("key", key.into())
    }

    /// Includes (or excludes) rows matching the end key
    pub fn with_inclusive_end(self, inclusive_end: bool) -> Self {
        self.with_param("inclusive_end", Value::Bool(inclusive_end))
    }

    /// Executes the action and waits for the result
    pub async fn run(self) -> Result<ViewResponse> {
        let transport = self.transport;
        transport.exec(self).await
    }
}

impl<'a, P: IntoViewPath<'a>> Action for ExecuteView<'a, P> {
    type Output = ViewResponse;
    type State = DatabaseName;

    fn make_request(self) -> Result<(Request, Self::State)> {
        let view_path = self.view_path.into_view_path()?;
        let db_name = view_path.database_name().to_owned_name();
        let request = Request::new(Method::GET, view_path.iter(), self.options);
        Ok((request, db_name))
    }

    fn take_response(response: Response, db_name: Self::State) -> Result<Self::Output> {
        match response.status() {
            StatusCode::OK => {
                let body: DecodedViewResponse = response.decode_json_body()?;
                ViewResponse::from_decoded(&db_name, body)
            }
            StatusCode::BAD_REQUEST => Err(Error::bad_request(response)),
            StatusCode::UNAUTHORIZED => Err(Error::unauthorized(response)),
            StatusCode::NOT_FOUND => Err(Error::not_found(response)),
            _ => Err(Error::server_response(response)),
        }
    }
}

/// Result of executing a view
///
/// `total_rows` and `offset` are absent when the view was reduced.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResponse {
    total_rows: Option<u64>,
    offset: Option<u64>,
    rows: Vec<ViewRow>,
}

/// One row of a view result
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    id: Option<DocumentId>,
    key: Value,
    value: Value,
    doc: Option<Document>,
}

#[derive(Debug, Deserialize)]
struct DecodedViewResponse {
    total_rows: Option<u64>,
    offset: Option<u64>,
    #[serde(default)]
    rows: Vec<DecodedViewRow>,
}

#[derive(Debug, Deserialize)]
struct DecodedViewRow {
    id: Option<DocumentId>,
    #[serde(default)]
    key: Value,
    #[serde(default)]
    value: Value,
    doc: Option<Value>,
}

impl ViewResponse {
    fn from_decoded(db_name: &DatabaseName, decoded: DecodedViewResponse) -> Result<Self> {
        let rows = decoded
            .rows
            .into_iter()
            .map(|row| {
                let doc = match row.doc {
                    None | Some(Value::Null) => None,
                    Some(doc) => Some(Document::from_json(db_name.clone(), doc)?),
                };
                Ok(ViewRow {
                    id: row.id,
                    key: row.key,
                    value: row.value,
                    doc,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            total_rows: decoded.total_rows,
            offset: decoded.offset,
            rows,
        })
    }

    pub fn total_rows(&self) -> Option<u64> {
        self.total_rows
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub fn rows(&self) -> &[ViewRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<ViewRow> {
        self.rows
    }
}

impl ViewRow {
    /// Id of the document that emitted the row; `None` for reduced rows
    pub fn id(&self) -> Option<&DocumentId> {
        self.id.as_ref()
    }

    pub fn key(&self) -> &Value {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The emitting document, when the view ran with `include_docs`
    pub fn doc(&self) -> Option<&Document> {
        self.doc.as_ref()
    }

    /// Decode the key into a concrete type
    pub fn key_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.key.clone())?)
    }

    /// Decode the value into a concrete type
    pub fn value_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.value.clone())?)
    }
}

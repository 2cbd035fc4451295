//! Defines an action for creating a database on the CouchDB server.

use super::Action;
use crate::errors::{Error, Result};
use crate::paths::IntoDatabasePath;
use crate::transport::{Method, Request, RequestOptions, Response, StatusCode, Transport};

/// Creates a database on the CouchDB server
///
/// Sends `PUT /db`.
///
/// # Errors
///
/// - `Error::DatabaseExists`: the database already exists.
/// - `Error::BadRequest`: the name is not a legal database name.
/// - `Error::Unauthorized`: the client is not a server admin.
pub struct CreateDatabase<'a, P> {
    transport: &'a Transport,
    db_path: P,
}

impl<'a, P: IntoDatabasePath<'a>> CreateDatabase<'a, P> {
    pub(crate) fn new(transport: &'a Transport, db_path: P) -> Self {
        Self { transport, db_path }
    }

    /// Executes the action and waits for the result
    pub async fn run(self) -> Result<()> {
        let transport = self.transport;
        transport.exec(self).await
    }
}

impl<'a, P: IntoDatabasePath<'a>> Action for CreateDatabase<'a, P> {
    type Output = ();
    type State = ();

    fn make_request(self) -> Result<(Request, Self::State)> {
        let db_path = self.db_path.into_database_path()?;
        let request = Request::new(
            Method::PUT,
            db_path.iter(),
            RequestOptions::new().with_accept_json(),
        );
        Ok((request, ()))
    }

    fn take_response(response: Response, _state: Self::State) -> Result<Self::Output> {
        match response.status() {
            StatusCode::CREATED | StatusCode::ACCEPTED => Ok(()),
            StatusCode::BAD_REQUEST => Err(Error::bad_request(response)),
            StatusCode::UNAUTHORIZED => Err(Error::unauthorized(response)),
            StatusCode::PRECONDITION_FAILED => Err(Error::database_exists(response)),
            _ => Err(Error::server_response(response)),
        }
    }
}

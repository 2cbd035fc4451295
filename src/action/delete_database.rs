//! Defines an action for deleting a database from the CouchDB server.

use super::Action;
use crate::errors::{Error, Result};
use crate::paths::IntoDatabasePath;
use crate::transport::{Method, Request, RequestOptions, Response, StatusCode, Transport};

/// Deletes a database and all its documents
///
/// Sends `DELETE /db`.
///
/// # Errors
///
/// - `Error::NotFound`: the database does not exist.
/// - `Error::Unauthorized`: the client is not a server admin.
pub struct DeleteDatabase<'a, P> {
    transport: &'a Transport,
    db_path: P,
}

impl<'a, P: IntoDatabasePath<'a>> DeleteDatabase<'a, P> {
    pub(crate) fn new(transport: &'a Transport, db_path: P) -> Self {
        Self { transport, db_path }
    }

    /// Executes the action and waits for the result
    pub async fn run(self) -> Result<()> {
        let transport = self.transport;
        transport.exec(self).await
    }
}

impl<'a, P: IntoDatabasePath<'a>> Action for DeleteDatabase<'a, P> {
    type Output = ();
    type State = ();

    fn make_request(self) -> Result<(Request, Self::State)> {
        let db_path = self.db_path.into_database_path()?;
        let request = Request::new(
            Method::DELETE,
            db_path.iter(),
            RequestOptions::new().with_accept_json(),
        );
        Ok((request, ()))
    }

    fn take_response(response: Response, _state: Self::State) -> Result<Self::Output> {
        match response.status() {
            StatusCode::OK | StatusCode::ACCEPTED => Ok(()),
            StatusCode::BAD_REQUEST => Err(Error::bad_request(response)),
            StatusCode::UNAUTHORIZED => Err(Error::unauthorized(response)),
            StatusCode::NOT_FOUND => Err(Error::not_found(response)),
            _ => Err(Error::server_response(response)),
        }
    }
}

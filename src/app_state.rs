//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{Error, session::Session};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,

    /// The transactions and categories, along with the database they are saved to.
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    /// Create a new [AppState] from a SQLite database connection.
    ///
    /// This function will initialize the database and load the saved session.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, local_timezone: &str) -> Result<Self, Error> {
        let session = Session::open(db_connection)?;

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            session: Arc::new(Mutex::new(session)),
        })
    }
}

/// Lock the session, mapping a poisoned lock to [Error::DatabaseLockError].
pub(crate) fn lock_session(session: &Mutex<Session>) -> Result<MutexGuard<'_, Session>, Error> {
    session
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)
}

//! Key-value record storage for the serialized session state.
//!
//! Each record is a JSON document stored under a fixed key in the `record` table.

use rusqlite::{Connection, OptionalExtension, Transaction as SqlTransaction};
use serde::{Serialize, de::DeserializeOwned};

use crate::Error;

/// The key for the JSON array of all transactions.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// The key for the user's custom categories, `{"income": [..], "expense": [..]}`.
pub const CUSTOM_CATEGORIES_KEY: &str = "customCategories";

/// Create the tables the application needs if they do not exist yet.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_record_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

fn create_record_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS record (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Load the record stored under `key`.
///
/// A missing record gives `T::default()`. So does a record that cannot be
/// deserialized, which is logged since the stored data is then ignored.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn load_record<T>(key: &str, connection: &Connection) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    let value: Option<String> = connection
        .query_row("SELECT value FROM record WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;

    let Some(value) = value else {
        tracing::debug!("no record stored for \"{key}\", using the default");
        return Ok(T::default());
    };

    match serde_json::from_str(&value) {
        Ok(record) => Ok(record),
        Err(error) => {
            tracing::error!("could not parse the record \"{key}\", using the default: {error}");
            Ok(T::default())
        }
    }
}

/// Serialize `record` as JSON and store it under `key`, replacing any previous value.
///
/// # Errors
/// Returns an error if `record` cannot be serialized or there is an SQL error.
pub fn save_record<T>(key: &str, record: &T, connection: &Connection) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_string(record)?;

    connection.execute(
        "INSERT OR REPLACE INTO record (key, value) VALUES (?1, ?2)",
        (key, value),
    )?;

    Ok(())
}

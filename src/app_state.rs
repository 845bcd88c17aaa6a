//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, config::AppConfig, db::initialize, timezone::get_local_offset};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or if
    /// `config.local_timezone` is not a valid, canonical timezone name.
    pub fn new(db_connection: Connection, config: &AppConfig) -> Result<Self, Error> {
        if get_local_offset(&config.local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(config.local_timezone.clone()));
        }

        initialize(&db_connection)?;

        Ok(Self {
            local_timezone: config.local_timezone.clone(),
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{AppState, Error, config::AppConfig};

    #[test]
    fn creates_state_and_tables() {
        let connection = Connection::open_in_memory().unwrap();

        let state = AppState::new(connection, &AppConfig::default()).unwrap();

        let connection = state.db_connection.lock().unwrap();
        let table_count: i64 = connection
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master \
                WHERE type = 'table' AND name IN ('expenses', 'subscriptions')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 2);
    }

    #[test]
    fn rejects_invalid_timezone() {
        let connection = Connection::open_in_memory().unwrap();
        let config = AppConfig {
            local_timezone: "Middle/Earth".to_owned(),
        };

        let result = AppState::new(connection, &config);

        assert_eq!(
            result.map(|_| ()),
            Err(Error::InvalidTimezoneError("Middle/Earth".to_owned()))
        );
    }
}

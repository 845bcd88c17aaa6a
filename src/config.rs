//! Explicit configuration for the database and the app.
//!
//! Nothing in here reads the environment; the server binary collects the
//! values (from command line flags or environment variables via `clap`) and
//! passes them in.

use std::path::PathBuf;

use rusqlite::Connection;

use crate::Error;

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// A database file on disk, created if it does not exist.
    File(PathBuf),
    /// A throwaway database that lives for as long as the connection.
    InMemory,
}

impl DatabaseConfig {
    /// Create a database config from a database URL or file path.
    ///
    /// Accepts plain file paths as well as `sqlite://path` and `sqlite:path`
    /// URLs. The path `:memory:` selects an in-memory database.
    pub fn from_url(url: &str) -> Self {
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url)
            .trim();

        if path == ":memory:" {
            DatabaseConfig::InMemory
        } else {
            DatabaseConfig::File(PathBuf::from(path))
        }
    }

    /// Open a connection to the configured database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the database could not be opened.
    pub fn open(&self) -> Result<Connection, Error> {
        let connection = match self {
            DatabaseConfig::File(path) => Connection::open(path)?,
            DatabaseConfig::InMemory => Connection::open_in_memory()?,
        };

        Ok(connection)
    }
}

/// Settings for the app, shared by all route handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to work out what "today" is when prefilling dates in forms.
    pub local_timezone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            local_timezone: "Etc/UTC".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::DatabaseConfig;

    #[test]
    fn plain_path_is_a_file() {
        assert_eq!(
            DatabaseConfig::from_url("data/spendwise.db"),
            DatabaseConfig::File(PathBuf::from("data/spendwise.db"))
        );
    }

    #[test]
    fn strips_sqlite_url_schemes() {
        assert_eq!(
            DatabaseConfig::from_url("sqlite:///var/lib/spendwise.db"),
            DatabaseConfig::File(PathBuf::from("/var/lib/spendwise.db"))
        );
        assert_eq!(
            DatabaseConfig::from_url("sqlite:spendwise.db"),
            DatabaseConfig::File(PathBuf::from("spendwise.db"))
        );
    }

    #[test]
    fn memory_path_is_in_memory() {
        assert_eq!(
            DatabaseConfig::from_url(":memory:"),
            DatabaseConfig::InMemory
        );
        assert_eq!(
            DatabaseConfig::from_url("sqlite::memory:"),
            DatabaseConfig::InMemory
        );
    }

    #[test]
    fn opens_in_memory_database() {
        let connection = DatabaseConfig::InMemory.open();

        assert!(connection.is_ok());
    }
}

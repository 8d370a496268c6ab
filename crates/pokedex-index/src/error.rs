use std::fmt;
use std::path::PathBuf;

/// Result type for pokedex-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reading a veekun snapshot
#[derive(Debug)]
pub enum Error {
    /// No snapshot file at the configured path
    SnapshotMissing(PathBuf),

    /// The file opened but lacks a table the lookups join on
    MissingTable(String),

    /// SQLite rejected a query or could not read the file
    Database(rusqlite::Error),
}

impl Error {
    /// True for SQLite errors caused by an older or trimmed veekun dump
    pub fn is_outdated_dump(&self) -> bool {
        match self {
            Error::Database(err) => {
                let msg = err.to_string();
                msg.contains("no such column") || msg.contains("no such table")
            }
            Error::MissingTable(_) => true,
            Error::SnapshotMissing(_) => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SnapshotMissing(path) => {
                write!(f, "no veekun snapshot at {}", path.display())
            }
            Error::MissingTable(table) => write!(
                f,
                "veekun snapshot has no '{}' table; install a full veekun-pokedex.sqlite",
                table
            ),
            Error::Database(err) if self.is_outdated_dump() => write!(
                f,
                "veekun snapshot is older than expected ({}); install a current veekun-pokedex.sqlite",
                err
            ),
            Error::Database(err) => write!(f, "snapshot read failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::SnapshotMissing(_) | Error::MissingTable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

use std::fmt;

/// Result type for pokedex-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Label is not one of the 18 known types
    UnknownType(String),

    /// Lookup query is empty or cannot be interpreted
    InvalidQuery(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownType(label) => write!(f, "Unknown type: {}", label),
            Error::InvalidQuery(query) => write!(f, "Invalid query: '{}'", query),
        }
    }
}

impl std::error::Error for Error {}

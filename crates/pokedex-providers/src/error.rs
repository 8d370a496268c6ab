use std::fmt;

/// Result type for pokedex-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// Transport failure (DNS, connect, timeout, TLS)
    Http(reqwest::Error),

    /// Response body was not the expected JSON
    Json(serde_json::Error),

    /// Resource answered 404
    NotFound(String),

    /// Resource answered with another non-success status
    Status { url: String, status: u16 },

    /// Response parsed but is missing data a record needs
    Parse(String),
}

impl Error {
    /// Whether the failure means "no such entity" rather than "source down"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::NotFound(url) => write!(f, "Not found: {}", url),
            Error::Status { url, status } => write!(f, "{} answered HTTP {}", url, status),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::NotFound(_) | Error::Status { .. } | Error::Parse(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

use std::fmt;

/// Result type for pokedex-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// No entity answers the query (unknown name, out-of-range id)
    NotFound(String),

    /// No data source could be reached (offline, network down, no snapshot)
    Unavailable(String),

    /// Source data rejected by the engine (evolution structure, efficacy table)
    Engine(pokedex_engine::Error),

    /// Snapshot layer error
    Index(pokedex_index::Error),

    /// Remote API layer error
    Provider(pokedex_providers::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Cached record could not be read or written
    Json(serde_json::Error),

    /// Configuration error
    Config(String),
}

impl Error {
    /// Failures the lookup replaces with the placeholder record
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::Unavailable(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(query) => write!(f, "Pokémon {} not found", query),
            Error::Unavailable(msg) => write!(f, "Data source unavailable: {}", msg),
            Error::Engine(err) => write!(f, "{}", err),
            Error::Index(err) => write!(f, "Snapshot error: {}", err),
            Error::Provider(err) => write!(f, "Provider error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "Cache error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::Index(err) => Some(err),
            Error::Provider(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::NotFound(_) | Error::Unavailable(_) | Error::Config(_) => None,
        }
    }
}

impl From<pokedex_engine::Error> for Error {
    fn from(err: pokedex_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<pokedex_engine::StructuralError> for Error {
    fn from(err: pokedex_engine::StructuralError) -> Self {
        Error::Engine(err.into())
    }
}

impl From<pokedex_index::Error> for Error {
    fn from(err: pokedex_index::Error) -> Self {
        Error::Index(err)
    }
}

impl From<pokedex_providers::Error> for Error {
    fn from(err: pokedex_providers::Error) -> Self {
        Error::Provider(err)
    }
}

impl From<pokedex_core::Error> for Error {
    fn from(err: pokedex_core::Error) -> Self {
        match err {
            pokedex_core::Error::Io(err) => Error::Io(err),
            pokedex_core::Error::Config(msg) => Error::Config(msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

use pokedex_types::Stage;
use std::fmt;

/// Result type for pokedex-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Evolution data that cannot form a single rooted tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// Every record names a parent
    NoRoot,

    /// More than one record has no parent
    MultipleRoots(Vec<u32>),

    /// Records left over after traversal (cycle or disconnected fragment)
    Unattached(Vec<u32>),

    /// Two records share a stage id
    DuplicateStage(Stage),
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::NoRoot => write!(f, "evolution family has no root stage"),
            StructuralError::MultipleRoots(ids) => {
                write!(f, "evolution family has several roots: {}", join_ids(ids))
            }
            StructuralError::Unattached(ids) => write!(
                f,
                "stages not connected to the family root: {}",
                join_ids(ids)
            ),
            StructuralError::DuplicateStage(stage) => write!(
                f,
                "stage #{:03} {} appears more than once",
                stage.id, stage.name
            ),
        }
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| format!("#{:03}", id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Evolution tree could not be assembled
    Structure(StructuralError),

    /// Type-efficacy row is missing fields or contradicts another row
    MalformedTable { row: usize, reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Structure(err) => write!(f, "Invalid evolution data: {}", err),
            Error::MalformedTable { row, reason } => {
                write!(f, "Malformed type-efficacy table (row {}): {}", row, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<StructuralError> for Error {
    fn from(err: StructuralError) -> Self {
        Error::Structure(err)
    }
}

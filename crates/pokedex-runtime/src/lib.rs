// Runtime: configuration, caches and record resolution
// Owns every data source; the engine only sees resolved values.

pub mod config;
pub mod error;
pub mod pokedex;
pub mod sources;
pub mod storage;

pub use config::{Config, SourceKind};
pub use error::{Error, Result};
pub use pokedex::{Entry, Pokedex, PrefetchReport};
pub use sources::{Family, RecordSource, RemoteSource, SnapshotSource, SourceEntry};

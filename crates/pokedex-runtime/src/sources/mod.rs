mod remote;
mod snapshot;

pub use remote::RemoteSource;
pub use snapshot::SnapshotSource;

use pokedex_types::{NestedSpecies, Pokemon, Query, SpeciesLink};

use crate::Result;

/// Family data in whichever shape the source stores it
#[derive(Debug, Clone)]
pub enum Family {
    /// Flat rows with parent pointers (snapshot)
    Links(Vec<SpeciesLink>),
    /// Nested chain (remote API)
    Nested(NestedSpecies),
    /// Source knows no family; the record stands alone
    Single,
    /// Family exists but could not be read this time. Drawn alone and
    /// never cached.
    Unresolved,
}

impl Family {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Family::Unresolved)
    }
}

/// Record as a source delivers it, before scoring and tree assembly
#[derive(Debug, Clone)]
pub struct SourceEntry {
    pub pokemon: Pokemon,
    pub family: Family,
}

/// A place records can be fetched from.
///
/// Implementations report a missing entity as [`crate::Error::NotFound`] and
/// an unreachable backend as [`crate::Error::Unavailable`].
pub trait RecordSource {
    /// Short name used in logs
    fn id(&self) -> &'static str;

    fn fetch(&self, query: &Query, language: &str, version: &str) -> Result<SourceEntry>;

    /// Raw sprite bytes for a pokemon (form) id, if the source serves images.
    /// `identifier` enables the sources that key sprites by name.
    fn sprite(&self, _sprite_id: u32, _identifier: Option<&str>, _shiny: bool) -> Option<Vec<u8>> {
        None
    }
}

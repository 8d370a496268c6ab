use pokedex_index::Database;
use pokedex_types::{Pokemon, Query};
use std::path::Path;

use super::{Family, RecordSource, SourceEntry};
use crate::{Error, Result};

/// Records read from the local veekun snapshot
pub struct SnapshotSource {
    db: Database,
}

impl SnapshotSource {
    /// Opens the snapshot at `path`. A missing file is [`Error::Unavailable`].
    pub fn open(path: &Path) -> Result<Self> {
        match Database::open(path) {
            Ok(db) => Ok(Self { db }),
            Err(pokedex_index::Error::SnapshotMissing(path)) => Err(Error::Unavailable(format!(
                "no snapshot at {}",
                path.display()
            ))),
            Err(err) => Err(err.into()),
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn species_id(&self, query: &Query, language: &str) -> Result<u32> {
        match query {
            Query::Id(id) => Ok(*id),
            Query::Name(name) => self
                .db
                .species_id_by_name(name, language)?
                .ok_or_else(|| Error::NotFound(query.to_string())),
        }
    }
}

impl RecordSource for SnapshotSource {
    fn id(&self) -> &'static str {
        "database"
    }

    fn fetch(&self, query: &Query, language: &str, version: &str) -> Result<SourceEntry> {
        if !query.in_range() {
            return Err(Error::NotFound(query.to_string()));
        }

        let species_id = self.species_id(query, language)?;
        if !self.db.has_version(version)? {
            tracing::warn!(version, "game version unknown to the snapshot; using fallback versions");
        }
        let row = self
            .db
            .pokedex_entry(species_id, language, version)?
            .ok_or_else(|| Error::NotFound(query.to_string()))?;

        let pokemon = Pokemon {
            number: row.species_id,
            name: row.name,
            identifier: row.identifier,
            genus: row.genus.unwrap_or_else(|| "???".to_string()),
            flavor: row
                .flavor
                .as_deref()
                .map(pokedex_providers::pokeapi::mapper::normalize_flavor)
                .unwrap_or_default(),
            types: self.db.types(species_id)?,
            height: Pokemon::height_from_decimeters(row.height_dm),
            weight: Pokemon::weight_from_hectograms(row.weight_hg),
            weaknesses: Vec::new(),
            mega_forms: self.db.mega_forms(species_id)?,
        };

        let links = self.db.evolution_links(species_id, language)?;
        let family = if links.is_empty() {
            Family::Single
        } else {
            Family::Links(links)
        };

        tracing::debug!(species_id, "snapshot record");
        Ok(SourceEntry { pokemon, family })
    }
}

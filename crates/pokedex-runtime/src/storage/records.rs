use pokedex_core::DataPaths;
use pokedex_types::{EvolutionTree, Pokemon};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::Result;

/// Resolved record as written under `records/`.
///
/// Language and version are stored so a lookup made with other settings
/// misses instead of showing text in the wrong language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedEntry {
    pub language: String,
    pub version: String,
    pub pokemon: Pokemon,
    pub chain: EvolutionTree,
}

/// JSON record cache, one file per species plus a name → id index
#[derive(Debug, Clone)]
pub struct RecordCache {
    paths: DataPaths,
}

impl RecordCache {
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    /// Cached entry for `id` in `language`/`version`, if any.
    ///
    /// Unreadable files count as a miss so a later fetch can overwrite them.
    pub fn load(&self, id: u32, language: &str, version: &str) -> Option<CachedEntry> {
        let path = self.paths.record_file(id);
        let content = std::fs::read_to_string(&path).ok()?;

        match serde_json::from_str::<CachedEntry>(&content) {
            Ok(entry) if entry.language == language && entry.version == version => {
                tracing::debug!(id, "record cache hit");
                Some(entry)
            }
            Ok(_) => {
                tracing::debug!(id, language, version, "cached record has other settings");
                None
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt cached record");
                None
            }
        }
    }

    pub fn store(&self, entry: &CachedEntry) -> Result<()> {
        let path = self.paths.record_file(entry.pokemon.number);
        write_json(&path, entry)?;

        let mut names = self.read_names();
        names.insert(entry.pokemon.name.to_lowercase(), entry.pokemon.number);
        write_json(&self.paths.name_index_file(), &names)?;

        tracing::debug!(id = entry.pokemon.number, "record cached");
        Ok(())
    }

    /// Species id remembered for a (lower-cased) display name
    pub fn id_for_name(&self, name: &str) -> Option<u32> {
        self.read_names().get(&name.trim().to_lowercase()).copied()
    }

    fn read_names(&self) -> BTreeMap<String, u32> {
        std::fs::read_to_string(self.paths.name_index_file())
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    Ok(())
}

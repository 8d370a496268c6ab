use image::RgbaImage;
use once_cell::unsync::OnceCell;
use pokedex_core::DataPaths;
use pokedex_engine::{
    EffectivenessTable, StructuralError, build_from_links, build_from_nested, score_weaknesses,
};
use pokedex_types::{EvolutionTree, PLACEHOLDER_NAME, Pokemon, Query, Stage};

use crate::config::{Config, SourceKind};
use crate::sources::{Family, RecordSource, RemoteSource, SnapshotSource, SourceEntry};
use crate::storage::{CachedEntry, RecordCache, SpriteCache};
use crate::{Error, Result};

/// Fully resolved lookup: the record with its weaknesses and family tree
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub pokemon: Pokemon,
    pub chain: EvolutionTree,
}

impl Entry {
    /// Stand-in shown when `query` resolves to nothing
    pub fn placeholder(query: &str) -> Self {
        Self {
            pokemon: Pokemon::placeholder(query),
            chain: EvolutionTree::leaf(Stage::new(0, PLACEHOLDER_NAME)),
        }
    }
}

/// Outcome of warming the caches for an id range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefetchReport {
    pub fetched: Vec<u32>,
    pub already_cached: Vec<u32>,
    pub failed: Vec<(u32, String)>,
}

/// Data sources and caches for one CLI invocation.
///
/// Sources open lazily on first use and stay open until the context drops.
pub struct Pokedex {
    paths: DataPaths,
    config: Config,
    records: RecordCache,
    sprites: SpriteCache,
    snapshot: OnceCell<Option<SnapshotSource>>,
    remote: OnceCell<RemoteSource>,
    table: OnceCell<EffectivenessTable>,
}

impl Pokedex {
    pub fn open(paths: DataPaths, config: Config) -> Result<Self> {
        paths.ensure_dirs()?;
        tracing::debug!(
            root = %paths.root().display(),
            source = %config.source,
            offline = config.offline,
            "opening pokedex"
        );

        Ok(Self {
            records: RecordCache::new(paths.clone()),
            sprites: SpriteCache::new(paths.clone()),
            paths,
            config,
            snapshot: OnceCell::new(),
            remote: OnceCell::new(),
            table: OnceCell::new(),
        })
    }

    // Sources

    fn snapshot(&self) -> Result<Option<&SnapshotSource>> {
        let slot = self.snapshot.get_or_try_init(|| {
            let path = self.config.database_path(&self.paths);
            match SnapshotSource::open(&path) {
                Ok(source) => Ok(Some(source)),
                Err(Error::Unavailable(msg)) => {
                    tracing::debug!("{}", msg);
                    Ok(None)
                }
                Err(err) => Err(err),
            }
        })?;
        Ok(slot.as_ref())
    }

    fn remote(&self) -> Result<&RemoteSource> {
        if self.config.offline {
            return Err(Error::Unavailable("offline mode".to_string()));
        }
        self.remote.get_or_try_init(|| RemoteSource::new(&self.config))
    }

    /// Source answering cache misses under the configured [`SourceKind`]
    fn source(&self) -> Result<&dyn RecordSource> {
        match self.config.source {
            SourceKind::Database => match self.snapshot()? {
                Some(snapshot) => Ok(snapshot),
                None => Err(Error::Unavailable(format!(
                    "no snapshot at {}",
                    self.config.database_path(&self.paths).display()
                ))),
            },
            SourceKind::Remote => Ok(self.remote()?),
            SourceKind::Auto => match self.snapshot()? {
                Some(snapshot) => Ok(snapshot),
                None => Ok(self.remote()?),
            },
        }
    }

    /// Efficacy chart from the snapshot when installed, the built-in one otherwise
    pub fn effectiveness(&self) -> Result<&EffectivenessTable> {
        self.table.get_or_try_init(|| {
            let table = match self.snapshot()? {
                Some(snapshot) => {
                    EffectivenessTable::from_entries(snapshot.database().type_efficacy()?)?
                }
                None => EffectivenessTable::builtin(),
            };
            tracing::debug!(entries = table.len(), "effectiveness table loaded");
            Ok(table)
        })
    }

    // Lookups

    /// Resolves `query` through the record cache and then the configured source.
    pub fn resolve(&self, query: &Query, language: &str, version: &str) -> Result<Entry> {
        if !query.in_range() {
            return Err(Error::NotFound(query.to_string()));
        }

        let cached_id = match query {
            Query::Id(id) => Some(*id),
            Query::Name(name) => self.records.id_for_name(name),
        };
        if let Some(cached) = cached_id.and_then(|id| self.records.load(id, language, version)) {
            return Ok(Entry {
                pokemon: cached.pokemon,
                chain: cached.chain,
            });
        }

        let source = self.source()?;
        tracing::debug!(source = source.id(), %query, "cache miss");
        self.admit(source.fetch(query, language, version)?, language, version)
    }

    /// Assembles a fetched record and writes it to the record cache unless
    /// its family could not be read.
    fn admit(&self, raw: SourceEntry, language: &str, version: &str) -> Result<Entry> {
        let complete = raw.family.is_resolved();
        let entry = self.assemble(raw)?;
        if !complete {
            tracing::debug!(id = entry.pokemon.number, "family unresolved; record not cached");
            return Ok(entry);
        }

        let cached = CachedEntry {
            language: language.to_string(),
            version: version.to_string(),
            pokemon: entry.pokemon.clone(),
            chain: entry.chain.clone(),
        };
        if let Err(err) = self.records.store(&cached) {
            tracing::warn!(id = entry.pokemon.number, error = %err, "could not cache record");
        }

        Ok(entry)
    }

    /// Resolves raw user input with the configured language and version.
    ///
    /// Misses and unreachable sources yield the placeholder record; every
    /// other failure propagates.
    pub fn lookup(&self, input: &str) -> Result<Entry> {
        let query = match input.parse::<Query>() {
            Ok(query) => query,
            Err(err) => {
                tracing::warn!(error = %err, "unusable query");
                return Ok(Entry::placeholder(input.trim()));
            }
        };

        match self.resolve(&query, &self.config.language, &self.config.version) {
            Ok(entry) => Ok(entry),
            Err(err) if err.is_recoverable() => {
                tracing::warn!(query = %input.trim(), error = %err, "showing placeholder");
                Ok(Entry::placeholder(input.trim()))
            }
            Err(err) => Err(err),
        }
    }

    /// Scores weaknesses and builds the family tree for a fetched record.
    fn assemble(&self, raw: SourceEntry) -> Result<Entry> {
        let SourceEntry { mut pokemon, family } = raw;

        let chain = match family {
            Family::Links(links) => build_from_links(links)?,
            Family::Nested(root) => build_from_nested(&root)?,
            Family::Single | Family::Unresolved => {
                EvolutionTree::leaf(Stage::new(pokemon.number, &pokemon.name))
            }
        };
        if !chain.contains(pokemon.number) {
            return Err(StructuralError::Unattached(vec![pokemon.number]).into());
        }

        pokemon.weaknesses = score_weaknesses(pokemon.types.as_slice(), self.effectiveness()?);
        Ok(Entry { pokemon, chain })
    }

    // Sprites

    /// Sprite for the record, downloading it into the cache when a remote
    /// source is allowed. `mega_index` 0 is the base form; `n` selects the
    /// n-th mega form.
    pub fn load_icon(
        &self,
        pokemon: &Pokemon,
        shiny: bool,
        mega_index: usize,
    ) -> Option<RgbaImage> {
        if pokemon.is_placeholder() {
            return None;
        }

        // Name-keyed sprite sources only know the base form's identifier
        let (sprite_id, identifier) = match mega_index {
            0 => (
                pokemon.number,
                Some(pokemon.identifier.as_str()).filter(|id| !id.is_empty()),
            ),
            n => (*pokemon.mega_forms.get(n - 1)?, None),
        };

        if let Some(image) = self.sprites.load(sprite_id, shiny) {
            return Some(image);
        }

        let bytes = self.download_sprite(sprite_id, identifier, shiny)?;
        if let Err(err) = self.sprites.store(sprite_id, shiny, &bytes) {
            tracing::warn!(sprite_id, error = %err, "could not cache sprite");
        }
        crate::storage::decode_sprite(&bytes)
    }

    fn download_sprite(
        &self,
        sprite_id: u32,
        identifier: Option<&str>,
        shiny: bool,
    ) -> Option<Vec<u8>> {
        let remote = match self.remote() {
            Ok(remote) => remote,
            Err(err) => {
                tracing::debug!(sprite_id, error = %err, "sprite not cached and no remote source");
                return None;
            }
        };

        let bytes = remote.sprite(sprite_id, identifier, shiny);
        if bytes.is_none() {
            tracing::warn!(sprite_id, "no sprite source answered");
        }
        bytes
    }

    // Maintenance

    /// Game versions the snapshot knows
    pub fn versions(&self) -> Result<Vec<String>> {
        match self.snapshot()? {
            Some(snapshot) => Ok(snapshot.database().versions()?),
            None => Err(Error::Unavailable(format!(
                "no snapshot at {}",
                self.config.database_path(&self.paths).display()
            ))),
        }
    }

    /// Resolves every id in `from..=to` so records and sprites land in the
    /// caches. Failures are collected per id; only structural errors in the
    /// source data abort the run.
    pub fn prefetch(
        &self,
        from: u32,
        to: u32,
        mut progress: impl FnMut(u32, &Result<Entry>),
    ) -> Result<PrefetchReport> {
        let mut report = PrefetchReport::default();
        let language = self.config.language.clone();
        let version = self.config.version.clone();

        for id in from..=to {
            if self.records.load(id, &language, &version).is_some() {
                report.already_cached.push(id);
                continue;
            }

            let result = self.resolve(&Query::Id(id), &language, &version);
            progress(id, &result);

            match result {
                Ok(_) if self.records.load(id, &language, &version).is_none() => {
                    report
                        .failed
                        .push((id, "evolution chain unavailable".to_string()));
                }
                Ok(entry) => {
                    let sprite_cached = self.sprites.contains(id, false);
                    if !sprite_cached && self.load_icon(&entry.pokemon, false, 0).is_none() {
                        tracing::debug!(id, "prefetched without sprite");
                    }
                    report.fetched.push(id);
                }
                Err(Error::Engine(err)) => return Err(Error::Engine(err)),
                Err(err) => report.failed.push((id, err.to_string())),
            }
        }

        Ok(report)
    }
}

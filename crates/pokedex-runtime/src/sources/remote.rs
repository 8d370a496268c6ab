use pokedex_providers::{PokeApiClient, RemoteChain, sprite_urls};
use pokedex_types::Query;

use super::{Family, RecordSource, SourceEntry};
use crate::config::Config;
use crate::{Error, Result};

/// Records fetched from PokeAPI
pub struct RemoteSource {
    client: PokeApiClient,
}

impl RemoteSource {
    pub fn new(config: &Config) -> Result<Self> {
        let client = PokeApiClient::new(&config.api_base_url, config.timeout())?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }
}

impl RecordSource for RemoteSource {
    fn id(&self) -> &'static str {
        "remote"
    }

    fn fetch(&self, query: &Query, language: &str, version: &str) -> Result<SourceEntry> {
        if !query.in_range() {
            return Err(Error::NotFound(query.to_string()));
        }

        let entry = self
            .client
            .fetch(query, language, version)
            .map_err(|err| match err {
                pokedex_providers::Error::NotFound(_) => Error::NotFound(query.to_string()),
                pokedex_providers::Error::Http(err) => Error::Unavailable(err.to_string()),
                pokedex_providers::Error::Status { url, status } => {
                    Error::Unavailable(format!("{} answered HTTP {}", url, status))
                }
                other => Error::Provider(other),
            })?;

        let family = match entry.chain {
            RemoteChain::Nested(chain) => Family::Nested(chain),
            RemoteChain::Absent => Family::Single,
            RemoteChain::Unreachable => Family::Unresolved,
        };

        Ok(SourceEntry {
            pokemon: entry.pokemon,
            family,
        })
    }

    fn sprite(&self, sprite_id: u32, identifier: Option<&str>, shiny: bool) -> Option<Vec<u8>> {
        self.client
            .fetch_first(&sprite_urls(sprite_id, identifier, shiny))
    }
}

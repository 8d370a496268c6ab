use pokedex_types::{NestedSpecies, Pokemon, Query};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::mapper;
use super::schema::{EvolutionChainResource, PokemonResource, SpeciesResource};
use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// User-Agent string for all HTTP requests
pub const USER_AGENT: &str = concat!("pokedex-cli/", env!("CARGO_PKG_VERSION"));

/// Default timeout for API and sprite requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Family chain of a fetched record
#[derive(Debug, Clone)]
pub enum RemoteChain {
    Nested(NestedSpecies),
    /// The species links no chain
    Absent,
    /// The species links a chain but the request for it failed
    Unreachable,
}

/// Record and family chain as served by the API
#[derive(Debug, Clone)]
pub struct RemoteEntry {
    pub pokemon: Pokemon,
    pub chain: RemoteChain,
}

/// Blocking client for the PokeAPI REST endpoints
pub struct PokeApiClient {
    http: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pokemon_url(&self, query: &Query) -> String {
        format!("{}/pokemon/{}", self.base_url, query.as_path_segment())
    }

    pub fn pokemon(&self, query: &Query) -> Result<PokemonResource> {
        self.get_json(&self.pokemon_url(query))
    }

    pub fn species(&self, url: &str) -> Result<SpeciesResource> {
        self.get_json(url)
    }

    pub fn evolution_chain(&self, url: &str) -> Result<EvolutionChainResource> {
        self.get_json(url)
    }

    /// Resolves `query` into a record plus its nested family chain.
    ///
    /// A failed chain request still returns the record, marked
    /// [`RemoteChain::Unreachable`].
    pub fn fetch(&self, query: &Query, language: &str, version: &str) -> Result<RemoteEntry> {
        let pokemon = self.pokemon(query)?;
        let species = self.species(&pokemon.species.url)?;

        let chain = match &species.evolution_chain {
            Some(resource) => match self.evolution_chain(&resource.url) {
                Ok(chain) => RemoteChain::Nested(mapper::to_nested(&chain.chain)?),
                Err(err) => {
                    tracing::warn!(url = %resource.url, error = %err, "evolution chain unavailable");
                    RemoteChain::Unreachable
                }
            },
            None => RemoteChain::Absent,
        };

        tracing::debug!(id = species.id, name = %pokemon.name, "fetched remote record");
        Ok(RemoteEntry {
            pokemon: mapper::to_pokemon(&pokemon, &species, language, version),
            chain,
        })
    }

    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send()?;
        let response = check_status(url, response)?;
        Ok(response.bytes()?.to_vec())
    }

    /// Bytes of the first URL that answers successfully.
    pub fn fetch_first(&self, urls: &[String]) -> Option<Vec<u8>> {
        for url in urls {
            match self.fetch_bytes(url) {
                Ok(bytes) if !bytes.is_empty() => return Some(bytes),
                Ok(_) => tracing::debug!(%url, "empty response"),
                Err(err) => tracing::debug!(%url, error = %err, "download failed"),
            }
        }
        None
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send()?;
        let response = check_status(url, response)?;
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn check_status(
    url: &str,
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(Error::NotFound(url.to_string())),
        status => Err(Error::Status {
            url: url.to_string(),
            status: status.as_u16(),
        }),
    }
}

/// Candidate sprite URLs for a pokemon id, best source first.
///
/// The name-keyed mirrors are only tried when the API `identifier` is known.
pub fn sprite_urls(pokemon_id: u32, identifier: Option<&str>, shiny: bool) -> Vec<String> {
    let (github, showdown, pokemondb) = if shiny {
        ("shiny/", "gen5-shiny", "shiny")
    } else {
        ("", "gen5", "normal")
    };

    let mut urls = vec![format!(
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{}{}.png",
        github, pokemon_id
    )];
    if let Some(identifier) = identifier {
        urls.push(format!(
            "https://play.pokemonshowdown.com/sprites/{}/{}.png",
            showdown, identifier
        ));
        urls.push(format!(
            "https://img.pokemondb.net/sprites/black-white/{}/{}.png",
            pokemondb, identifier
        ));
    }
    urls
}

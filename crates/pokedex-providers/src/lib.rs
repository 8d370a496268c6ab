// Error types
pub mod error;

// PokeAPI adapter
pub mod pokeapi;

pub use pokeapi::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PokeApiClient, RemoteChain, RemoteEntry, sprite_urls,
};

// Error types
pub use error::{Error, Result};

mod client;
pub mod mapper;
pub mod schema;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PokeApiClient, RemoteChain, RemoteEntry, USER_AGENT,
    sprite_urls,
};

mod efficacy;
mod evolution;
mod pokemon;
mod query;

pub use efficacy::EfficacyEntry;
pub use evolution::{EvolutionTree, NestedSpecies, SpeciesLink, Stage};
pub use pokemon::{MAX_SPECIES_ID, PLACEHOLDER_NAME, Pokemon, PokemonType};
pub use query::Query;

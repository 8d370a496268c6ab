mod records;
mod sprites;

pub use records::{CachedEntry, RecordCache};
pub use sprites::{SpriteCache, decode as decode_sprite};

pub mod species;
pub mod types;
pub mod versions;

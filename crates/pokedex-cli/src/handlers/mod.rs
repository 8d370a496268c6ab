pub mod prefetch;
pub mod show;
pub mod types;
pub mod versions;

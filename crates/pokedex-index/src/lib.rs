// veekun snapshot access
// Read-only; every statement is parameterized

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::{Database, FALLBACK_VERSIONS};
pub use error::{Error, Result};
pub use records::EntryRow;
pub use schema::{REQUIRED_TABLES, init_schema};

// NOTE: pokedex CLI layout
//
// args         clap definitions only, no behavior
// commands     dispatch from parsed args to handlers
// context      per-invocation state: data dir, merged config, lazily opened Pokedex
// handlers     one module per subcommand; fetch data, pick a renderer, write output
// presentation cell buffer, palette and the four render targets (card/json/simple/line)
//
// Renderers return Strings (or fill a CellBuffer) and never touch stdout
// themselves, so every output mode can be asserted in tests.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;

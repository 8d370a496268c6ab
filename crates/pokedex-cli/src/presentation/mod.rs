//! # Presentation Layer
//!
//! Turns a resolved [`Entry`](pokedex_runtime::Entry) into terminal output.
//!
//! ```text
//! [ Handler ] --> [ Renderer ] ==(card)==> [ CellBuffer ] --> crossterm --> stdout
//!                              ==(json / simple / line)==> String --> stdout
//! ```
//!
//! Renderers never write to stdout. The card renderer fills a
//! [`CellBuffer`] through the engine's [`Canvas`](pokedex_engine::Canvas)
//! trait; the handler decides where the buffer is flushed.

pub mod buffer;
pub mod colors;
pub mod draw;
pub mod guidance;
pub mod renderers;

pub use buffer::{Cell, CellBuffer};
pub use renderers::{render_card, render_json, render_line, render_simple, render_type_chart};

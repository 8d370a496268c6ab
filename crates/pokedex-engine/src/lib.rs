// Engine module - pure computation over resolved records
// Nothing in this crate performs I/O; callers fetch data first and hand it in.

pub mod canvas;
pub mod error;
pub mod evolution;
pub mod layout;
pub mod weakness;

pub use canvas::{Canvas, Xterm};
pub use error::{Error, Result, StructuralError};
pub use evolution::{build_from_links, build_from_nested};
pub use layout::{Extent, draw_evolutions, generation_width, measure, subtree_height};
pub use weakness::{EffectivenessTable, score_weaknesses, static_weaknesses};

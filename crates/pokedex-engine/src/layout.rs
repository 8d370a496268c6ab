use pokedex_types::{EvolutionTree, Stage};
use unicode_width::UnicodeWidthStr;

use crate::canvas::{Canvas, Xterm};

/// Rows a single stage takes: the `#NNN` line and the name line
pub const STAGE_HEIGHT: usize = 2;

pub const CONNECTOR: &str = " > ";
pub const CONNECTOR_WIDTH: usize = 3;

pub const HIGHLIGHT_FG: Xterm = 15;
pub const DIM_FG: Xterm = 245;
pub const CONNECTOR_FG: Xterm = 33;

/// Cell footprint of a drawn tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: usize,
    pub height: usize,
}

pub fn id_label(id: u32) -> String {
    format!("#{:03}", id)
}

/// Column a stage needs: the display width of its name.
///
/// A `#NNN` label wider than a short name spills into the blank cells the
/// connector leaves on the label row.
fn stage_width(stage: &Stage) -> usize {
    stage.name.width()
}

fn column_width(generation: &[EvolutionTree]) -> usize {
    generation
        .iter()
        .map(|t| stage_width(&t.stage))
        .max()
        .unwrap_or(0)
}

/// Rows needed to draw `tree`. Siblings stack; a linear chain stays at
/// [`STAGE_HEIGHT`].
pub fn subtree_height(tree: &EvolutionTree) -> usize {
    if tree.is_leaf() {
        STAGE_HEIGHT
    } else {
        tree.evolutions.iter().map(subtree_height).sum()
    }
}

/// Columns needed to draw a row of siblings and everything below them.
pub fn generation_width(generation: &[EvolutionTree]) -> usize {
    let own = column_width(generation);
    let deeper = generation
        .iter()
        .filter(|t| !t.is_leaf())
        .map(|t| generation_width(&t.evolutions))
        .max();

    match deeper {
        Some(width) => own + CONNECTOR_WIDTH + width,
        None => own,
    }
}

pub fn measure(tree: &EvolutionTree) -> Extent {
    Extent {
        width: generation_width(std::slice::from_ref(tree)),
        height: subtree_height(tree),
    }
}

/// Centers `text` in `width` columns; extra padding goes to the right.
pub fn center(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    let left = (width - used) / 2;
    let right = width - used - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Draws the family tree with its root at `origin`.
///
/// The stage whose id equals `highlight` is drawn bright, all others dim.
pub fn draw_evolutions<C>(canvas: &mut C, tree: &EvolutionTree, highlight: u32, origin: (usize, usize))
where
    C: Canvas + ?Sized,
{
    let width = stage_width(&tree.stage);
    draw_stage(canvas, tree, highlight, width, origin);
}

fn draw_stage<C>(
    canvas: &mut C,
    tree: &EvolutionTree,
    highlight: u32,
    width: usize,
    (x, y): (usize, usize),
) where
    C: Canvas + ?Sized,
{
    let fg = if tree.stage.id == highlight {
        HIGHLIGHT_FG
    } else {
        DIM_FG
    };

    canvas.put_line(x, y, &center(&id_label(tree.stage.id), width), fg, None);
    canvas.put_line(x, y + 1, &center(&tree.stage.name, width), fg, None);

    if tree.is_leaf() {
        return;
    }

    canvas.put_line(x + width, y + 1, CONNECTOR, CONNECTOR_FG, None);

    let child_x = x + width + CONNECTOR_WIDTH;
    let child_width = column_width(&tree.evolutions);
    let mut child_y = y;
    for evolution in &tree.evolutions {
        draw_stage(canvas, evolution, highlight, child_width, (child_x, child_y));
        child_y += subtree_height(evolution);
    }
}

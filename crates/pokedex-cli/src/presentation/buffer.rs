use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use pokedex_engine::{Canvas, Xterm};
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// Marks the right half of a double-width glyph
const CONTINUATION: char = '\0';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    /// `None` keeps the terminal's default color
    pub fg: Option<Xterm>,
    pub bg: Option<Xterm>,
}

impl Cell {
    const BLANK: Cell = Cell {
        glyph: ' ',
        fg: None,
        bg: None,
    };
}

/// Fixed-size grid of colored terminal cells, flushed in one pass.
pub struct CellBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// Drops every row from `height` down
    pub fn truncate_rows(&mut self, height: usize) {
        self.height = self.height.min(height);
        self.cells.truncate(self.width * self.height);
    }

    /// Glyphs only, one string per row with trailing blanks removed
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| {
                row.iter()
                    .filter(|cell| cell.glyph != CONTINUATION)
                    .map(|cell| cell.glyph)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    /// Writes the grid with xterm-256 color sequences. Colors are only
    /// re-emitted when they change and every row ends reset.
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.cells.chunks(self.width.max(1)).take(self.height) {
            let mut pen = (None, None);

            for cell in row.iter().filter(|cell| cell.glyph != CONTINUATION) {
                if (cell.fg, cell.bg) != pen {
                    queue!(
                        out,
                        SetForegroundColor(to_color(cell.fg)),
                        SetBackgroundColor(to_color(cell.bg))
                    )?;
                    pen = (cell.fg, cell.bg);
                }
                queue!(out, Print(cell.glyph))?;
            }

            queue!(out, ResetColor, Print('\n'))?;
        }

        out.flush()
    }
}

fn to_color(value: Option<Xterm>) -> Color {
    match value {
        Some(index) => Color::AnsiValue(index),
        None => Color::Reset,
    }
}

impl Canvas for CellBuffer {
    fn put_cell(&mut self, x: usize, y: usize, glyph: char, fg: Xterm, bg: Option<Xterm>) {
        if x >= self.width || y >= self.height {
            return;
        }

        let index = y * self.width + x;
        self.cells[index] = Cell {
            glyph,
            fg: Some(fg),
            bg,
        };

        if glyph.width() == Some(2) && x + 1 < self.width {
            self.cells[index + 1] = Cell {
                glyph: CONTINUATION,
                fg: Some(fg),
                bg,
            };
        }
    }
}

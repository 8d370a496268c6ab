use unicode_width::UnicodeWidthChar;

/// Index into the xterm 256-color palette
pub type Xterm = u8;

/// A grid of terminal cells addressed by (column, row).
///
/// `bg = None` leaves the background transparent. Implementations clip
/// writes that fall outside the grid.
pub trait Canvas {
    fn put_cell(&mut self, x: usize, y: usize, glyph: char, fg: Xterm, bg: Option<Xterm>);

    /// Writes `text` left to right starting at (x, y), advancing by each
    /// character's display width. Zero-width characters are dropped.
    fn put_line(&mut self, x: usize, y: usize, text: &str, fg: Xterm, bg: Option<Xterm>) {
        let mut column = x;
        for glyph in text.chars() {
            let width = glyph.width().unwrap_or(0);
            if width == 0 {
                continue;
            }
            self.put_cell(column, y, glyph, fg, bg);
            column += width;
        }
    }
}

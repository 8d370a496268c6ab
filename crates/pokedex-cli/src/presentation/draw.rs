use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use pokedex_engine::{Canvas, Xterm};

use super::colors::{CLEANED_PIXEL, rgb_to_xterm};

/// Sprites are scaled to fit a square of this many pixels
pub const ICON_SIZE: u32 = 32;

const UPPER_HALF: char = '▀';
const LOWER_HALF: char = '▄';
const DARK_THRESHOLD: u8 = 30;
const OPAQUE_THRESHOLD: u8 = 128;

/// 3×3 box-drawing templates for the big dex number
fn digit_template(symbol: char) -> Option<[&'static str; 3]> {
    let template = match symbol {
        '0' => ["┌─┐", "│ │", "└─┘"],
        '1' => [" ┐ ", " │ ", " ┴ "],
        '2' => ["┌─┐", "┌─┘", "└─┘"],
        '3' => ["┌─┐", " ─┤", "└─┘"],
        '4' => ["┬ ┬", "└─┤", "  ┴"],
        '5' => ["┌─┐", "└─┐", "└─┘"],
        '6' => ["┌─┐", "├─┐", "└─┘"],
        '7' => ["┌─┐", "  │", "  ┴"],
        '8' => ["┌─┐", "├─┤", "└─┘"],
        '9' => ["┌─┐", "└─┤", "└─┘"],
        '#' => [" ┼┼", " ┼┼", "   "],
        _ => return None,
    };
    Some(template)
}

/// Text drawn by [`draw_number`]: `#` and the zero-padded id
pub fn number_label(number: u32) -> String {
    format!("#{:03}", number)
}

/// Columns [`draw_number`] occupies
pub fn number_width(number: u32) -> usize {
    number_label(number).chars().count() * 3
}

/// Draws `#NNN` three rows tall with its top-left corner at (x0, y0).
pub fn draw_number<C: Canvas + ?Sized>(canvas: &mut C, number: u32, x0: usize, y0: usize, fg: Xterm) {
    for (index, symbol) in number_label(number).chars().enumerate() {
        let Some(template) = digit_template(symbol) else {
            continue;
        };
        for (dy, row) in template.iter().enumerate() {
            for (dx, glyph) in row.chars().enumerate() {
                canvas.put_cell(x0 + index * 3 + dx, y0 + dy, glyph, fg, None);
            }
        }
    }
}

/// Word-wraps `text` to `width` columns and draws one line per row.
/// Returns the number of rows used.
pub fn draw_wrapped<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    width: usize,
    x0: usize,
    y0: usize,
    fg: Xterm,
) -> usize {
    let lines = wrap(text, width);
    for (dy, line) in lines.iter().enumerate() {
        canvas.put_line(x0, y0 + dy, line, fg, None);
    }
    lines.len()
}

/// Wrapped lines; words longer than `width` stay whole
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let options = textwrap::Options::new(width.max(1)).break_words(false);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Turns isolated near-black pixels into dark grey so they stay visible
/// on dark terminals. Pixels on the image border are left alone.
pub fn clean_sprite(image: &mut RgbaImage) {
    let (width, height) = image.dimensions();
    if width < 3 || height < 3 {
        return;
    }

    let source = image.clone();
    let is_dark = |pixel: &Rgba<u8>| pixel.0[..3].iter().all(|&c| c < DARK_THRESHOLD);

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if !is_dark(source.get_pixel(x, y)) {
                continue;
            }
            let neighbors = [
                source.get_pixel(x - 1, y),
                source.get_pixel(x + 1, y),
                source.get_pixel(x, y - 1),
                source.get_pixel(x, y + 1),
            ];
            if neighbors.iter().all(|n| !is_dark(n)) {
                let alpha = source.get_pixel(x, y).0[3];
                let [r, g, b] = CLEANED_PIXEL;
                image.put_pixel(x, y, Rgba([r, g, b, alpha]));
            }
        }
    }
}

/// Nearest-neighbor scale so the longer side becomes [`ICON_SIZE`]
pub fn fit_icon(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return RgbaImage::new(0, 0);
    }

    let ratio = f64::from(ICON_SIZE) / f64::from(width.max(height));
    let new_width = ((f64::from(width) * ratio) as u32).clamp(1, ICON_SIZE);
    let new_height = ((f64::from(height) * ratio) as u32).clamp(1, ICON_SIZE);
    imageops::resize(image, new_width, new_height, FilterType::Nearest)
}

fn xterm_of(pixel: &Rgba<u8>) -> Option<Xterm> {
    let [r, g, b, a] = pixel.0;
    (a >= OPAQUE_THRESHOLD).then(|| rgb_to_xterm(r, g, b))
}

/// Draws a sprite into a 32×16 cell block at (x0, y0), two pixel rows per
/// cell using half-block glyphs. The sprite is scaled, vertically centered
/// and cleaned first. Transparent pixels leave the cell untouched.
pub fn draw_image<C: Canvas + ?Sized>(canvas: &mut C, image: &RgbaImage, x0: usize, y0: usize) {
    let mut sprite = fit_icon(image);
    clean_sprite(&mut sprite);

    let (width, height) = sprite.dimensions();
    let y_offset = (ICON_SIZE - height) / 2;

    for y in (0..height).step_by(2) {
        let row = y0 + ((y + y_offset) / 2) as usize;
        for x in 0..width {
            let top = xterm_of(sprite.get_pixel(x, y));
            let bottom = if y + 1 < height {
                xterm_of(sprite.get_pixel(x, y + 1))
            } else {
                None
            };

            let column = x0 + x as usize;
            match (top, bottom) {
                (Some(top), bottom) => canvas.put_cell(column, row, UPPER_HALF, top, bottom),
                (None, Some(bottom)) => canvas.put_cell(column, row, LOWER_HALF, bottom, None),
                (None, None) => {}
            }
        }
    }
}

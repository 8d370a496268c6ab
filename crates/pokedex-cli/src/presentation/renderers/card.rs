use image::RgbaImage;
use pokedex_engine::{Canvas, draw_evolutions, measure};
use pokedex_runtime::Entry;
use unicode_width::UnicodeWidthStr;

use super::capitalize;
use crate::presentation::buffer::CellBuffer;
use crate::presentation::colors::{BADGE_FG, LABEL_FG, RULE_FG, TEXT_FG, type_color};
use crate::presentation::draw::{
    ICON_SIZE, draw_image, draw_number, draw_wrapped, number_width, wrap,
};

const MARGIN: usize = 3;
const ICON_GAP: usize = 2;
const MIN_CONTENT_WIDTH: usize = 32;
/// Header columns taken up next to the genus text itself
const GENUS_PADDING: usize = 3 + 8 + 12;

const HEADER_Y: usize = 1;
const TYPES_Y: usize = 5;
const FLAVOR_Y: usize = 7;
const FIRST_RULE_Y: usize = 11;
const WEAKNESS_X: usize = 14;

const ICON_COLUMNS: usize = ICON_SIZE as usize;
const ICON_ROWS: usize = ICON_COLUMNS / 2;

/// Width of the text column left of the icons
pub fn content_width(entry: &Entry) -> usize {
    let genus = entry.pokemon.genus.width() + GENUS_PADDING;
    [
        measure(&entry.chain).width,
        genus,
        MIN_CONTENT_WIDTH,
        ICON_COLUMNS + 4,
    ]
    .into_iter()
    .max()
    .unwrap_or(MIN_CONTENT_WIDTH)
}

/// Lays out the full card. `icons` holds one slot per sprite to draw
/// (base form first, then mega forms); empty slots keep their space.
pub fn render_card(entry: &Entry, icons: &[Option<RgbaImage>]) -> CellBuffer {
    let pokemon = &entry.pokemon;
    let content_width = content_width(entry);
    let rule = "-".repeat(content_width - MARGIN);

    let icon_slots = icons.len().max(1);
    let icons_width = icon_slots * ICON_COLUMNS + 4;

    // Rows depend on how far flavor text and weakness badges wrap,
    // so draw into an oversized buffer and cut it down afterwards.
    let tree = measure(&entry.chain);
    let wrapped_rows = wrap(&pokemon.flavor, content_width - MARGIN).len();
    let scratch_height = FIRST_RULE_Y + wrapped_rows + pokemon.weaknesses.len() + 8 + tree.height;
    let width = content_width + icons_width + 4 + 1;
    let mut buffer = CellBuffer::new(width, scratch_height.max(ICON_ROWS + 2));

    for (index, icon) in icons.iter().enumerate() {
        if let Some(image) = icon {
            let x = content_width + MARGIN + (ICON_COLUMNS + ICON_GAP) * index;
            draw_image(&mut buffer, image, x, HEADER_Y);
        }
    }

    buffer.put_line(MARGIN, HEADER_Y, &pokemon.name, TEXT_FG, None);
    buffer.put_line(
        MARGIN,
        HEADER_Y + 1,
        &format!("{} Pokémon", capitalize(&pokemon.genus)),
        LABEL_FG,
        None,
    );
    buffer.put_line(
        MARGIN,
        HEADER_Y + 2,
        &format!("{:.2} m / {:.1} kg", pokemon.height_m(), pokemon.weight_kg()),
        RULE_FG,
        None,
    );
    let number_x = content_width.saturating_sub(number_width(pokemon.number));
    draw_number(&mut buffer, pokemon.number, number_x, HEADER_Y, TEXT_FG);

    let mut x = MARGIN;
    for label in &pokemon.types {
        let badge = format!(" {} ", label.to_uppercase());
        buffer.put_line(x, TYPES_Y, &badge, BADGE_FG, Some(type_color(label)));
        x += badge.width() + 1;
    }

    let flavor_rows = draw_wrapped(
        &mut buffer,
        &pokemon.flavor,
        content_width - MARGIN,
        MARGIN,
        FLAVOR_Y,
        TEXT_FG,
    );

    let rule_y = FIRST_RULE_Y.max(FLAVOR_Y + flavor_rows);
    buffer.put_line(MARGIN, rule_y, &rule, RULE_FG, None);

    let weakness_y = rule_y + 1;
    buffer.put_line(MARGIN, weakness_y, "Weaknesses:", LABEL_FG, None);
    let last_badge_row = draw_weaknesses(&mut buffer, &pokemon.weaknesses, content_width, weakness_y);

    let footer_y = last_badge_row + 2;
    buffer.put_line(MARGIN, footer_y, &rule, RULE_FG, None);

    let tree_y = footer_y + 2;
    draw_evolutions(&mut buffer, &entry.chain, pokemon.number, (MARGIN, tree_y));

    let height = (tree_y + tree.height + 1).max(HEADER_Y + ICON_ROWS + 1);
    buffer.truncate_rows(height);
    buffer
}

/// Badges flow left to right from the label and wrap onto the next row
/// when they would cross `right_edge`. Returns the last row used.
fn draw_weaknesses<C: Canvas>(
    canvas: &mut C,
    weaknesses: &[String],
    right_edge: usize,
    y: usize,
) -> usize {
    if weaknesses.is_empty() {
        canvas.put_line(WEAKNESS_X + 1, y, "None", LABEL_FG, None);
        return y;
    }

    let mut row = y;
    let mut x = WEAKNESS_X;
    for label in weaknesses {
        let badge = format!(" {} ", label.to_uppercase());
        let width = badge.width();
        if x > WEAKNESS_X && x + width > right_edge {
            row += 1;
            x = WEAKNESS_X;
        }
        canvas.put_line(x, row, &badge, BADGE_FG, Some(type_color(label)));
        x += width + 2;
    }
    row
}

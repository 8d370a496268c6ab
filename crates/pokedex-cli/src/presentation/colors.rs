use pokedex_engine::Xterm;
use pokedex_types::PokemonType;

/// Text drawn on top of type badges
pub const BADGE_FG: Xterm = 0;
/// Primary text
pub const TEXT_FG: Xterm = 15;
/// Labels and the genus line
pub const LABEL_FG: Xterm = 245;
/// Rules and the height/weight line
pub const RULE_FG: Xterm = 240;
/// Dark grey that replaces stray black pixels in sprites
pub const CLEANED_PIXEL: [u8; 3] = [40, 40, 40];

/// Badge background for a type label; unknown labels get black
pub fn type_color(label: &str) -> Xterm {
    match PokemonType::parse(label) {
        Some(kind) => badge_color(kind),
        None => 0,
    }
}

pub fn badge_color(kind: PokemonType) -> Xterm {
    match kind {
        PokemonType::Normal => 250,
        PokemonType::Fire => 196,
        PokemonType::Water => 33,
        PokemonType::Electric => 220,
        PokemonType::Grass => 40,
        PokemonType::Ice => 51,
        PokemonType::Fighting => 167,
        PokemonType::Poison => 127,
        PokemonType::Ground => 178,
        PokemonType::Flying => 117,
        PokemonType::Psychic => 205,
        PokemonType::Bug => 70,
        PokemonType::Rock => 137,
        PokemonType::Ghost => 92,
        PokemonType::Dragon => 27,
        PokemonType::Dark => 237,
        PokemonType::Steel => 245,
        PokemonType::Fairy => 213,
    }
}

/// Nearest xterm-256 index for an RGB triple.
///
/// Near-grey colors map onto the grayscale ramp (232-255), everything else
/// onto the 6×6×6 color cube (16-231).
pub fn rgb_to_xterm(r: u8, g: u8, b: u8) -> Xterm {
    let avg = ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8;
    let max_diff = r.abs_diff(avg).max(g.abs_diff(avg)).max(b.abs_diff(avg));

    if max_diff < 10 {
        match avg {
            0..8 => 16,
            248.. => 231,
            _ => 232 + (avg - 8) / 10,
        }
    } else {
        16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
    }
}

// Cube levels: 0, 95, 135, 175, 215, 255
fn cube_index(value: u8) -> u8 {
    match value {
        0..48 => 0,
        48..115 => 1,
        115..155 => 2,
        155..195 => 3,
        195..235 => 4,
        _ => 5,
    }
}

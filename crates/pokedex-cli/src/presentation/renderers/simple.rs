use pokedex_runtime::Entry;

use super::{joined_types, weakness_list};

const RULE_WIDTH: usize = 40;

/// Five-line plain text block closed by a dashed rule
pub fn render_simple(entry: &Entry) -> String {
    let pokemon = &entry.pokemon;

    [
        format!(
            "{} (#{:03}), {} Pokémon",
            pokemon.name, pokemon.number, pokemon.genus
        ),
        format!(
            "{}, {:.2} m, {:.1} kg",
            joined_types(&pokemon.types),
            pokemon.height_m(),
            pokemon.weight_kg()
        ),
        pokemon.flavor.clone(),
        format!("Weaknesses: {}", weakness_list(&pokemon.weaknesses)),
        "-".repeat(RULE_WIDTH),
    ]
    .join("\n")
}

use pokedex_runtime::Entry;

use super::{joined_types, weakness_list};

/// Everything on one line, family as `#NNN > #NNN` in pre-order
pub fn render_line(entry: &Entry) -> String {
    let pokemon = &entry.pokemon;
    let family = entry
        .chain
        .stages()
        .iter()
        .map(|stage| format!("#{:03}", stage.id))
        .collect::<Vec<_>>()
        .join(" > ");

    format!(
        "{} (#{:03}): {} | {} | Weaknesses: {}",
        pokemon.name,
        pokemon.number,
        joined_types(&pokemon.types),
        family,
        weakness_list(&pokemon.weaknesses)
    )
}

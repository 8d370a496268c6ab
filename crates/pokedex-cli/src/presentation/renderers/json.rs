use pokedex_runtime::Entry;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

#[derive(Serialize)]
struct JsonStage<'a> {
    number: u32,
    name: &'a str,
}

/// Field order and names are part of the output contract
#[derive(Serialize)]
struct JsonEntry<'a> {
    number: u32,
    name: &'a str,
    genus: &'a str,
    flavor: &'a str,
    types: &'a [String],
    weaknesses: &'a [String],
    chain: Vec<JsonStage<'a>>,
    /// Millimeters
    height: u32,
    /// Centigrams
    weight: u32,
}

/// Pretty-printed object with a four-space indent
pub fn render_json(entry: &Entry) -> serde_json::Result<String> {
    let pokemon = &entry.pokemon;
    let view = JsonEntry {
        number: pokemon.number,
        name: &pokemon.name,
        genus: &pokemon.genus,
        flavor: &pokemon.flavor,
        types: &pokemon.types,
        weaknesses: &pokemon.weaknesses,
        chain: entry
            .chain
            .stages()
            .into_iter()
            .map(|stage| JsonStage {
                number: stage.id,
                name: &stage.name,
            })
            .collect(),
        height: pokemon.height,
        weight: pokemon.weight,
    };

    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    view.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

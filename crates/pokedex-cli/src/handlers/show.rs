use crate::context::ExecutionContext;
use crate::presentation::{render_card, render_json, render_line, render_simple};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use image::RgbaImage;
use pokedex_runtime::{Entry, Pokedex};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
pub struct ShowOptions {
    pub format: OutputFormat,
    pub shiny: bool,
    pub mega: bool,
}

/// Renders every query in order. A query that resolves to nothing prints
/// the placeholder record; structural data errors stop the run.
pub fn handle(ctx: &ExecutionContext, queries: &[String], options: ShowOptions) -> Result<()> {
    let pokedex = ctx.pokedex()?;
    let mut out = io::stdout().lock();

    for query in queries {
        let entry = pokedex
            .lookup(query)
            .with_context(|| format!("lookup of '{}' failed", query.trim()))?;
        tracing::debug!(number = entry.pokemon.number, format = %options.format, "rendering");

        match options.format {
            OutputFormat::Card => {
                let icons = load_icons(pokedex, &entry, options);
                render_card(&entry, &icons).display(&mut out)?;
            }
            OutputFormat::Json => writeln!(out, "{}", render_json(&entry)?)?,
            OutputFormat::Simple => writeln!(out, "{}", render_simple(&entry))?,
            OutputFormat::Line => writeln!(out, "{}", render_line(&entry))?,
        }
    }

    Ok(())
}

/// Base sprite first, then one slot per mega form when asked for
fn load_icons(pokedex: &Pokedex, entry: &Entry, options: ShowOptions) -> Vec<Option<RgbaImage>> {
    let forms = if options.mega {
        entry.pokemon.mega_forms.len()
    } else {
        0
    };

    (0..=forms)
        .map(|mega_index| pokedex.load_icon(&entry.pokemon, options.shiny, mega_index))
        .collect()
}

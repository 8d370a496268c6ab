use owo_colors::OwoColorize;

use crate::args::hints::cmd;

/// What the data directory holds, for tailoring the no-command screen
#[derive(Debug, Clone, Copy, Default)]
pub struct GuidanceContext {
    pub snapshot_installed: bool,
    pub has_cached_records: bool,
}

pub fn render_guidance(context: &GuidanceContext, colored: bool) -> String {
    let heading = |text: &str| {
        if colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    };
    let command = |text: &str, note: &str| {
        let padded = format!("{:<36}", text);
        if colored {
            format!("  {} {}", padded.cyan(), format!("# {}", note).dimmed())
        } else {
            format!("  {} # {}", padded, note)
        }
    };

    let mut lines = vec!["pokedex - A Pokédex for the terminal".to_string(), String::new()];

    lines.push(heading("Look something up:"));
    lines.push(command(cmd::SHOW, "Card with sprite and evolutions"));
    lines.push(command(cmd::SHOW_LINE, "One line per Pokémon"));
    lines.push(command(cmd::SHOW_JSON, "Machine-readable record"));
    lines.push(String::new());

    if !context.snapshot_installed && !context.has_cached_records {
        lines.push(heading("Working offline:"));
        lines.push(command(cmd::PREFETCH_KANTO, "Cache records and sprites"));
        lines.push(String::new());
    }

    lines.push(heading("Reference:"));
    lines.push(command(cmd::TYPES, "Type colors and weaknesses"));
    if context.snapshot_installed {
        lines.push(command(cmd::VERSIONS, "Game versions in the snapshot"));
    }
    lines.push(String::new());
    lines.push("For more commands:".to_string());
    lines.push(format!("  {}", cmd::HELP));

    lines.join("\n")
}

use owo_colors::{OwoColorize, XtermColors};
use pokedex_engine::static_weaknesses;
use pokedex_types::PokemonType;

use super::weakness_list;
use crate::presentation::colors::{BADGE_FG, badge_color};

const BADGE_WIDTH: usize = 10;

/// One row per type: its badge and the types it takes double damage from
pub fn render_type_chart(colored: bool) -> String {
    PokemonType::ALL
        .iter()
        .map(|&kind| {
            let label = format!(" {:<width$}", kind.as_str().to_uppercase(), width = BADGE_WIDTH - 1);
            let badge = if colored {
                label
                    .color(XtermColors::from(BADGE_FG))
                    .on_color(XtermColors::from(badge_color(kind)))
                    .to_string()
            } else {
                label
            };
            format!(
                "{}  weak to {}",
                badge,
                weakness_list(&static_weaknesses(&[kind.as_str()]))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_chart_lists_every_type() {
        let chart = render_type_chart(false);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], " NORMAL     weak to Fighting");
        assert_eq!(lines[1], " FIRE       weak to Ground, Rock, Water");
        assert!(!chart.contains('\x1b'));
    }

    #[test]
    fn test_colored_chart_uses_badge_colors() {
        let chart = render_type_chart(true);
        let fire = chart.lines().nth(1).unwrap();

        assert!(fire.starts_with('\x1b'));
        assert!(fire.contains("38;5;0"));
        assert!(fire.contains("48;5;196m FIRE"));
        assert!(fire.ends_with("  weak to Ground, Rock, Water"));
    }
}

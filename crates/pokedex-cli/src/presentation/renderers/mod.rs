mod card;
mod json;
mod line;
mod simple;
mod type_chart;

pub use card::{content_width, render_card};
pub use json::render_json;
pub use line::render_line;
pub use simple::render_simple;
pub use type_chart::render_type_chart;

/// `fire` -> `Fire`
pub(crate) fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `Fire/Flying`
pub(crate) fn joined_types(types: &[String]) -> String {
    types
        .iter()
        .map(|t| capitalize(t))
        .collect::<Vec<_>>()
        .join("/")
}

/// `Water, Electric` or `None`
pub(crate) fn weakness_list(weaknesses: &[String]) -> String {
    if weaknesses.is_empty() {
        return "None".to_string();
    }
    weaknesses
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(", ")
}

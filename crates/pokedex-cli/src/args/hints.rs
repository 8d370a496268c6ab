pub mod cmd {
    // Lookups
    pub const SHOW: &str = "pokedex show <name-or-number>";
    pub const SHOW_LINE: &str = "pokedex show 1 4 7 --format line";
    pub const SHOW_JSON: &str = "pokedex show eevee --format json";

    // Maintenance
    pub const PREFETCH_KANTO: &str = "pokedex prefetch 1 151";
    pub const VERSIONS: &str = "pokedex versions";
    pub const TYPES: &str = "pokedex types";

    pub const HELP: &str = "pokedex --help";
}

pub mod fmt {
    pub fn prefetch(from: u32, to: u32) -> String {
        format!("pokedex prefetch {} {}", from, to)
    }
}

/// One species row joined with its localized name, genus and flavor text.
///
/// Units are the snapshot's own: decimeters and hectograms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub species_id: u32,
    /// Identifier of the species' default pokemon (`mr-mime`)
    pub identifier: String,
    pub name: String,
    /// Category without the trailing "Pokémon"
    pub genus: Option<String>,
    pub flavor: Option<String>,
    pub height_dm: u32,
    pub weight_hg: u32,
}

/// One row of a type-efficacy chart as read from a data source.
///
/// Every field is optional because sources can be incomplete; the engine
/// rejects rows with missing fields when it builds its table.
/// `damage_factor` is a percentage (200 = super effective).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EfficacyEntry {
    pub attacker: Option<String>,
    pub defender: Option<String>,
    pub damage_factor: Option<i64>,
}

impl EfficacyEntry {
    pub fn new(attacker: &str, defender: &str, damage_factor: i64) -> Self {
        Self {
            attacker: Some(attacker.to_string()),
            defender: Some(defender.to_string()),
            damage_factor: Some(damage_factor),
        }
    }
}

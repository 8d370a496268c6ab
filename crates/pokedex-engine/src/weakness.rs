use pokedex_types::{EfficacyEntry, PokemonType};
use std::collections::{HashMap, HashSet};

use crate::{Error, Result};

/// Damage factor (percent) at which an attack counts as super effective
pub const SUPER_EFFECTIVE: u32 = 200;

/// Most weaknesses a record lists
pub const MAX_WEAKNESSES: usize = 4;

/// Attacking types that deal double damage to each defending type
const DOUBLE_DAMAGE_FROM: [(PokemonType, &[PokemonType]); 18] = {
    use PokemonType::*;
    [
        (Normal, &[Fighting]),
        (Fire, &[Water, Ground, Rock]),
        (Water, &[Electric, Grass]),
        (Electric, &[Ground]),
        (Grass, &[Fire, Ice, Poison, Flying, Bug]),
        (Ice, &[Fire, Fighting, Rock, Steel]),
        (Fighting, &[Flying, Psychic, Fairy]),
        (Poison, &[Ground, Psychic]),
        (Ground, &[Water, Ice, Grass]),
        (Flying, &[Electric, Ice, Rock]),
        (Psychic, &[Bug, Ghost, Dark]),
        (Bug, &[Fire, Flying, Rock]),
        (Rock, &[Water, Grass, Fighting, Ground, Steel]),
        (Ghost, &[Ghost, Dark]),
        (Dragon, &[Ice, Dragon, Fairy]),
        (Dark, &[Fighting, Bug, Fairy]),
        (Steel, &[Fire, Fighting, Ground]),
        (Fairy, &[Poison, Steel]),
    ]
};

fn double_damage_from(defender: PokemonType) -> &'static [PokemonType] {
    DOUBLE_DAMAGE_FROM
        .iter()
        .find(|(t, _)| *t == defender)
        .map(|(_, attackers)| *attackers)
        .unwrap_or(&[])
}

/// Union of the precomputed weakness lists of `types`, deduplicated and
/// sorted alphabetically. No scoring and no truncation.
pub fn static_weaknesses<S: AsRef<str>>(types: &[S]) -> Vec<String> {
    let mut labels: Vec<String> = types
        .iter()
        .filter_map(|t| PokemonType::parse(t.as_ref()))
        .flat_map(double_damage_from)
        .map(|t| t.as_str().to_string())
        .collect();
    labels.sort();
    labels.dedup();
    labels
}

/// Type-efficacy chart indexed by defending type.
///
/// Factors are integer percentages. Labels are stored lower-cased.
#[derive(Debug, Clone, Default)]
pub struct EffectivenessTable {
    by_defender: HashMap<String, Vec<(String, u32)>>,
    entries: usize,
}

impl EffectivenessTable {
    /// Builds the table from source rows, rejecting the first row that is
    /// missing a field, has an empty label, a negative factor, or repeats an
    /// (attacker, defender) pair.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = EfficacyEntry>,
    {
        let mut table = Self::default();
        let mut seen = HashSet::new();

        for (row, entry) in entries.into_iter().enumerate() {
            let malformed = |reason: &str| Error::MalformedTable {
                row,
                reason: reason.to_string(),
            };

            let attacker = entry
                .attacker
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| malformed("missing attacking type"))?;
            let defender = entry
                .defender
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| malformed("missing defending type"))?;
            let factor = entry
                .damage_factor
                .ok_or_else(|| malformed("missing damage factor"))?;
            let factor = u32::try_from(factor)
                .map_err(|_| malformed(&format!("invalid damage factor {}", factor)))?;

            if !seen.insert((attacker.clone(), defender.clone())) {
                return Err(malformed(&format!(
                    "duplicate entry {} -> {}",
                    attacker, defender
                )));
            }

            table
                .by_defender
                .entry(defender)
                .or_default()
                .push((attacker, factor));
            table.entries += 1;
        }

        Ok(table)
    }

    /// Chart compiled into the binary. Carries only the super-effective
    /// pairs, which is all scoring reads.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for (defender, attackers) in DOUBLE_DAMAGE_FROM {
            let row = table
                .by_defender
                .entry(defender.as_str().to_string())
                .or_default();
            for attacker in attackers {
                row.push((attacker.as_str().to_string(), SUPER_EFFECTIVE));
                table.entries += 1;
            }
        }
        table
    }

    /// (attacker, factor) pairs hitting `defender`; empty for unknown labels
    pub fn attackers_of(&self, defender: &str) -> &[(String, u32)] {
        self.by_defender
            .get(&defender.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

/// Ranks the types that hit `types` super effectively.
///
/// Each attacker scores the sum of its super-effective factors over all of
/// the record's types. Ordered by score descending, then label ascending,
/// and cut to [`MAX_WEAKNESSES`].
pub fn score_weaknesses<S: AsRef<str>>(types: &[S], table: &EffectivenessTable) -> Vec<String> {
    let mut scores: HashMap<&str, u32> = HashMap::new();

    for defender in types {
        for (attacker, factor) in table.attackers_of(defender.as_ref()) {
            if *factor >= SUPER_EFFECTIVE {
                *scores.entry(attacker.as_str()).or_insert(0) += factor;
            }
        }
    }

    let mut ranked: Vec<(&str, u32)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(MAX_WEAKNESSES)
        .map(|(label, _)| label.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_ties_are_alphabetical() {
        let table = EffectivenessTable::builtin();
        assert_eq!(score_weaknesses(&["water"], &table), vec!["electric", "grass"]);
    }

    #[test]
    fn test_dual_type_scores_add_up() {
        // Bug/Flying: rock hits both halves, so it outranks everything else
        let table = EffectivenessTable::builtin();
        let weaknesses = score_weaknesses(&["bug", "flying"], &table);
        assert_eq!(weaknesses, vec!["rock", "electric", "fire", "flying"]);
    }

    #[test]
    fn test_unknown_type_contributes_nothing() {
        let table = EffectivenessTable::builtin();
        assert!(score_weaknesses(&["stellar"], &table).is_empty());
        assert_eq!(
            score_weaknesses(&["stellar", "normal"], &table),
            vec!["fighting"]
        );
    }

    #[test]
    fn test_empty_types_yield_no_weaknesses() {
        let table = EffectivenessTable::builtin();
        let none: [&str; 0] = [];
        assert!(score_weaknesses(&none, &table).is_empty());
        assert!(static_weaknesses(&none).is_empty());
    }

    #[test]
    fn test_never_more_than_four() {
        let table = EffectivenessTable::builtin();
        for a in PokemonType::ALL {
            for b in PokemonType::ALL {
                let ranked = score_weaknesses(&[a.as_str(), b.as_str()], &table);
                assert!(ranked.len() <= MAX_WEAKNESSES, "{}/{}", a, b);
            }
        }
    }

    #[test]
    fn test_single_type_agrees_with_static_lists() {
        let table = EffectivenessTable::builtin();
        for t in PokemonType::ALL {
            let scored = score_weaknesses(&[t.as_str()], &table);
            let listed = static_weaknesses(&[t.as_str()]);
            let prefix: Vec<String> = listed.iter().take(MAX_WEAKNESSES).cloned().collect();
            assert_eq!(scored, prefix, "{}", t);
        }
    }

    #[test]
    fn test_static_union_is_sorted_and_deduplicated() {
        assert_eq!(
            static_weaknesses(&["grass", "poison"]),
            vec!["bug", "fire", "flying", "ground", "ice", "poison", "psychic"]
        );
    }

    #[test]
    fn test_sub_super_effective_rows_are_ignored() {
        let table = EffectivenessTable::from_entries(vec![
            EfficacyEntry::new("fire", "grass", 200),
            EfficacyEntry::new("water", "grass", 50),
            EfficacyEntry::new("ghost", "normal", 0),
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(score_weaknesses(&["grass"], &table), vec!["fire"]);
        assert!(score_weaknesses(&["normal"], &table).is_empty());
    }

    #[test]
    fn test_missing_factor_is_malformed() {
        let rows = vec![
            EfficacyEntry::new("fire", "grass", 200),
            EfficacyEntry {
                attacker: Some("water".to_string()),
                defender: Some("fire".to_string()),
                damage_factor: None,
            },
        ];

        let err = EffectivenessTable::from_entries(rows).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedTable {
                row: 1,
                reason: "missing damage factor".to_string()
            }
        );
    }

    #[test]
    fn test_missing_label_and_negative_factor_are_malformed() {
        let no_attacker = EfficacyEntry {
            attacker: None,
            defender: Some("fire".to_string()),
            damage_factor: Some(200),
        };
        assert!(EffectivenessTable::from_entries(vec![no_attacker]).is_err());

        let negative = EfficacyEntry::new("fire", "grass", -200);
        assert!(EffectivenessTable::from_entries(vec![negative]).is_err());
    }

    #[test]
    fn test_duplicate_pair_is_malformed() {
        let rows = vec![
            EfficacyEntry::new("fire", "grass", 200),
            EfficacyEntry::new("Fire", "grass", 200),
        ];
        assert!(matches!(
            EffectivenessTable::from_entries(rows),
            Err(Error::MalformedTable { row: 1, .. })
        ));
    }
}

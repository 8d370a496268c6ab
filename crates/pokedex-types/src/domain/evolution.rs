use serde::{Deserialize, Serialize};

/// One stage of an evolution family, identified by (id, display name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stage {
    pub id: u32,
    pub name: String,
}

impl Stage {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Rooted evolution family.
///
/// Children keep the order in which the source listed them; the leftmost
/// evolution is drawn first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionTree {
    pub stage: Stage,
    #[serde(default)]
    pub evolutions: Vec<EvolutionTree>,
}

impl EvolutionTree {
    pub fn leaf(stage: Stage) -> Self {
        Self {
            stage,
            evolutions: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.evolutions.is_empty()
    }

    /// All stages in depth-first pre-order
    pub fn stages(&self) -> Vec<&Stage> {
        let mut out = Vec::new();
        self.collect_stages(&mut out);
        out
    }

    fn collect_stages<'a>(&'a self, out: &mut Vec<&'a Stage>) {
        out.push(&self.stage);
        for evolution in &self.evolutions {
            evolution.collect_stages(out);
        }
    }

    pub fn find(&self, id: u32) -> Option<&EvolutionTree> {
        if self.stage.id == id {
            return Some(self);
        }
        self.evolutions.iter().find_map(|e| e.find(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.find(id).is_some()
    }

    pub fn stage_count(&self) -> usize {
        1 + self
            .evolutions
            .iter()
            .map(EvolutionTree::stage_count)
            .sum::<usize>()
    }
}

/// Flat evolution row: one species and the species it evolves from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesLink {
    pub id: u32,
    pub name: String,
    pub evolves_from: Option<u32>,
}

impl SpeciesLink {
    pub fn new(id: u32, name: impl Into<String>, evolves_from: Option<u32>) -> Self {
        Self {
            id,
            name: name.into(),
            evolves_from,
        }
    }
}

/// Nested evolution node, each carrying its own evolutions inline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedSpecies {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub evolves_to: Vec<NestedSpecies>,
}

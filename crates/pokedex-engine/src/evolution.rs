use pokedex_types::{EvolutionTree, NestedSpecies, SpeciesLink, Stage};
use std::collections::HashSet;

use crate::{Result, StructuralError};

/// Assembles a family tree from flat (id, name, evolves-from) rows.
///
/// Exactly one row may lack a parent. Children are attached in input order.
pub fn build_from_links(links: Vec<SpeciesLink>) -> Result<EvolutionTree> {
    let mut seen = HashSet::new();
    for link in &links {
        if !seen.insert(link.id) {
            return Err(StructuralError::DuplicateStage(Stage::new(link.id, &link.name)).into());
        }
    }

    let roots: Vec<u32> = links
        .iter()
        .filter(|l| l.evolves_from.is_none())
        .map(|l| l.id)
        .collect();

    let root_id = match roots.as_slice() {
        [] => return Err(StructuralError::NoRoot.into()),
        [root] => *root,
        _ => return Err(StructuralError::MultipleRoots(roots).into()),
    };

    let mut pending = links;
    let root_index = pending
        .iter()
        .position(|l| l.id == root_id)
        .ok_or(StructuralError::NoRoot)?;
    let root = pending.remove(root_index);

    let tree = attach(Stage::new(root.id, root.name), &mut pending);

    if !pending.is_empty() {
        let ids = pending.iter().map(|l| l.id).collect();
        return Err(StructuralError::Unattached(ids).into());
    }

    Ok(tree)
}

fn attach(stage: Stage, pending: &mut Vec<SpeciesLink>) -> EvolutionTree {
    let (children, rest): (Vec<SpeciesLink>, Vec<SpeciesLink>) = std::mem::take(pending)
        .into_iter()
        .partition(|l| l.evolves_from == Some(stage.id));
    *pending = rest;

    let evolutions = children
        .into_iter()
        .map(|child| attach(Stage::new(child.id, child.name), pending))
        .collect();

    EvolutionTree { stage, evolutions }
}

/// Copies a nested chain into an [`EvolutionTree`], keeping child order.
pub fn build_from_nested(root: &NestedSpecies) -> Result<EvolutionTree> {
    let mut seen = HashSet::new();
    copy_nested(root, &mut seen)
}

fn copy_nested(node: &NestedSpecies, seen: &mut HashSet<u32>) -> Result<EvolutionTree> {
    let stage = Stage::new(node.id, &node.name);
    if !seen.insert(node.id) {
        return Err(StructuralError::DuplicateStage(stage).into());
    }

    let evolutions = node
        .evolves_to
        .iter()
        .map(|child| copy_nested(child, seen))
        .collect::<Result<Vec<_>>>()?;

    Ok(EvolutionTree { stage, evolutions })
}

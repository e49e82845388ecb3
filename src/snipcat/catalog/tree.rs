//! Flat category list to category forest.
//!
//! Nodes live in an arena indexed by input position. Parent links are resolved
//! through an id to slot map, so no node ever holds a reference to another
//! while the forest is being linked. Owned [`CategoryNode`]s are only
//! materialized once every slot knows its children, leaves first, so no
//! step of the build recurses on depth.
//!
//! # Invariants
//! - Every input category appears exactly once in the returned forest.
//! - Roots and siblings keep their relative input order.
//! - A `parent_id` that names no category in the input makes the node a root.

use crate::model::{Category, CategoryNode};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    OnPath,
    Done,
}

/// Assembles categories into a forest and returns its roots.
///
/// Siblings are NOT ordered by `sort_order`; callers that render the tree
/// use [`CategoryNode::sort_children_by_order`].
pub fn build_tree(categories: &[Category]) -> Vec<CategoryNode> {
    // First occurrence wins when ids repeat
    let mut slots: HashMap<&str, usize> = HashMap::with_capacity(categories.len());
    for (idx, category) in categories.iter().enumerate() {
        slots.entry(category.id.as_str()).or_insert(idx);
    }

    let parents: Vec<Option<usize>> = categories
        .iter()
        .map(|category| {
            category
                .parent_id
                .as_deref()
                .and_then(|parent_id| slots.get(parent_id).copied())
        })
        .collect();

    let cycle_breaks = find_cycle_breaks(&parents);

    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); categories.len()];
    for (idx, parent) in parents.iter().enumerate() {
        match parent {
            Some(parent) if !cycle_breaks[idx] => children[*parent].push(idx),
            _ => roots.push(idx),
        }
    }

    // Pre-order lists every parent before its children, so walking it
    // backwards finishes each subtree before the node that owns it
    let mut order = Vec::with_capacity(categories.len());
    let mut pending: Vec<usize> = roots.iter().rev().copied().collect();
    while let Some(idx) = pending.pop() {
        order.push(idx);
        pending.extend(children[idx].iter().rev());
    }

    let mut built: Vec<Option<CategoryNode>> = (0..categories.len()).map(|_| None).collect();
    for &idx in order.iter().rev() {
        let mut node = CategoryNode::new(categories[idx].clone());
        node.children = children[idx]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[idx] = Some(node);
    }

    roots
        .into_iter()
        .filter_map(|idx| built[idx].take())
        .collect()
}

/// Marks one node per parent cycle to be promoted to root.
///
/// Each node has at most one parent, so every connected component holds at
/// most one cycle. The member that comes first in input order is promoted.
fn find_cycle_breaks(parents: &[Option<usize>]) -> Vec<bool> {
    let mut state = vec![Visit::Pending; parents.len()];
    let mut breaks = vec![false; parents.len()];
    let mut path = Vec::new();

    for start in 0..parents.len() {
        let mut cursor = Some(start);
        while let Some(current) = cursor {
            match state[current] {
                Visit::Done => break,
                Visit::OnPath => {
                    let entry = path.iter().position(|&p| p == current).unwrap_or(0);
                    if let Some(&first) = path[entry..].iter().min() {
                        log::warn!("event=category_cycle action=promote_root slot={first}");
                        breaks[first] = true;
                    }
                    break;
                }
                Visit::Pending => {
                    state[current] = Visit::OnPath;
                    path.push(current);
                    cursor = parents[current];
                }
            }
        }
        for visited in path.drain(..) {
            state[visited] = Visit::Done;
        }
    }

    breaks
}

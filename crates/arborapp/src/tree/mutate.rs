//! # Immutable Mutators
//!
//! Each mutator takes a root collection and returns a new one. Inputs are never
//! modified. Only the nodes on the route from the root to the edited
//! collection are rebuilt; every other handle in the result is the very same
//! `Arc` as in the input, so unchanged subtrees cost nothing and can be
//! compared with `Arc::ptr_eq`.
//!
//! None of the mutators fail. A request that cannot apply (a path that does
//! not resolve, a route through a leaf) yields the input tree unchanged, and
//! `remove` additionally reports `None` for the detached node.

use std::sync::Arc;

use crate::model::{NodePatch, NodeRef};
use crate::path::split_parent;

/// Applies `edit` to the children collection at `base` and rebuilds the
/// ancestors above it. `None` when `base` does not denote a collection or when
/// `edit` declines.
fn edit_collection<F>(nodes: &[NodeRef], base: &[usize], edit: F) -> Option<Vec<NodeRef>>
where
    F: FnOnce(&[NodeRef]) -> Option<Vec<NodeRef>>,
{
    let Some((&index, rest)) = base.split_first() else {
        return edit(nodes);
    };
    let node = nodes.get(index)?;
    let children = node.children()?;
    let new_children = edit_collection(children, rest, edit)?;

    let mut rebuilt = nodes.to_vec();
    rebuilt[index] = Arc::new(node.with_children(new_children));
    Some(rebuilt)
}

/// Merges `patch` into the node at `path`.
///
/// Permissive by contract: an empty or unresolvable path leaves the tree as it
/// was, with no signal to the caller. Callers that must report a missing node
/// resolve the path first.
pub fn update(nodes: &[NodeRef], path: &[usize], patch: &NodePatch) -> Vec<NodeRef> {
    try_update(nodes, path, patch).unwrap_or_else(|| nodes.to_vec())
}

pub(crate) fn try_update(
    nodes: &[NodeRef],
    path: &[usize],
    patch: &NodePatch,
) -> Option<Vec<NodeRef>> {
    let (parent, index) = split_parent(path)?;
    edit_collection(nodes, parent, |collection| {
        let target = collection.get(index)?;
        let mut edited = collection.to_vec();
        edited[index] = Arc::new(target.patched(patch));
        Some(edited)
    })
}

/// Detaches the node at `path`, returning the new tree and the detached
/// subtree. An unresolvable path returns the tree unchanged and `None`.
pub fn remove(nodes: &[NodeRef], path: &[usize]) -> (Vec<NodeRef>, Option<NodeRef>) {
    let Some((parent, index)) = split_parent(path) else {
        return (nodes.to_vec(), None);
    };
    let mut detached = None;
    let edited = edit_collection(nodes, parent, |collection| {
        if index >= collection.len() {
            return None;
        }
        let mut remaining = collection.to_vec();
        detached = Some(remaining.remove(index));
        Some(remaining)
    });
    match edited {
        Some(tree) => (tree, detached),
        None => (nodes.to_vec(), None),
    }
}

/// Inserts `node` into the collection at `base` (the root collection when
/// `base` is empty) at `index`, clamped to `[0, len]`. A `base` that resolves
/// to a leaf, or to nothing, leaves the tree unchanged.
pub fn insert(nodes: &[NodeRef], base: &[usize], index: isize, node: NodeRef) -> Vec<NodeRef> {
    try_insert(nodes, base, index, node)
        .map(|(tree, _)| tree)
        .unwrap_or_else(|| nodes.to_vec())
}

/// Like [`insert`], also reporting the clamped index the node landed at.
pub(crate) fn try_insert(
    nodes: &[NodeRef],
    base: &[usize],
    index: isize,
    node: NodeRef,
) -> Option<(Vec<NodeRef>, usize)> {
    let mut landed = 0;
    let tree = edit_collection(nodes, base, |collection| {
        let at = clamp_index(index, collection.len());
        let mut edited = Vec::with_capacity(collection.len() + 1);
        edited.extend_from_slice(&collection[..at]);
        edited.push(node);
        edited.extend_from_slice(&collection[at..]);
        landed = at;
        Some(edited)
    })?;
    Some((tree, landed))
}

fn clamp_index(index: isize, len: usize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as usize).min(len)
    }
}

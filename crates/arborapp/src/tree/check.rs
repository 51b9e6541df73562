//! Integrity diagnostics.
//!
//! The edit functions keep ids unique and folders well-formed on their own, but
//! documents also arrive from storage and from other clients. [`check`]
//! reports what is wrong with such a document; [`repair`] fixes it.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::model::{new_node_id, NodeKind, NodeRef, TreeNode};
use crate::path::format_path;
use crate::tree::normalize::normalize;
use crate::tree::rows::all_rows;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeIssue {
    /// The same id is used by more than one node.
    DuplicateId { id: String, paths: Vec<Vec<usize>> },
    /// A folder is missing `isExpanded` or `children`.
    UnsetFolderFields { path: Vec<usize> },
}

impl std::fmt::Display for TreeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeIssue::DuplicateId { id, paths } => {
                let at: Vec<String> = paths.iter().map(|p| format_path(p)).collect();
                write!(f, "duplicate id '{}' at {}", id, at.join(", "))
            }
            TreeIssue::UnsetFolderFields { path } => {
                write!(f, "folder at {} has unset fields", format_path(path))
            }
        }
    }
}

pub fn check(nodes: &[NodeRef]) -> Vec<TreeIssue> {
    let rows = all_rows(nodes);
    let mut issues = Vec::new();

    let mut by_id: HashMap<&str, Vec<Vec<usize>>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for row in &rows {
        let paths = by_id.entry(row.node.id.as_str()).or_default();
        if paths.is_empty() {
            order.push(row.node.id.as_str());
        }
        paths.push(row.path.clone());
    }
    for id in order {
        let paths = &by_id[id];
        if paths.len() > 1 {
            issues.push(TreeIssue::DuplicateId {
                id: id.to_string(),
                paths: paths.clone(),
            });
        }
    }

    for row in &rows {
        if let NodeKind::Folder {
            is_expanded,
            children,
        } = &row.node.kind
        {
            if is_expanded.is_none() || children.is_none() {
                issues.push(TreeIssue::UnsetFolderFields {
                    path: row.path.clone(),
                });
            }
        }
    }

    issues
}

/// Normalizes the tree and gives every repeated id after its first
/// depth-first occurrence a fresh one. Returns the repaired tree and the
/// number of ids reassigned.
pub fn repair(nodes: &[NodeRef]) -> (Vec<NodeRef>, usize) {
    let normalized = normalize(nodes);
    let mut seen = HashSet::new();
    let mut reassigned = 0;
    let repaired = reassign_duplicates(&normalized, &mut seen, &mut reassigned);
    (repaired, reassigned)
}

fn reassign_duplicates(
    nodes: &[NodeRef],
    seen: &mut HashSet<String>,
    reassigned: &mut usize,
) -> Vec<NodeRef> {
    nodes
        .iter()
        .map(|node| {
            let fresh_id = if seen.insert(node.id.clone()) {
                None
            } else {
                *reassigned += 1;
                let id = new_node_id(node.kind.label());
                seen.insert(id.clone());
                Some(id)
            };
            let children = node
                .children()
                .map(|children| reassign_duplicates(children, seen, reassigned));

            if fresh_id.is_none() && children.is_none() {
                return Arc::clone(node);
            }
            let mut rebuilt: TreeNode = match children {
                Some(children) => node.with_children(children),
                None => TreeNode::clone(node),
            };
            if let Some(id) = fresh_id {
                rebuilt.id = id;
            }
            Arc::new(rebuilt)
        })
        .collect()
}

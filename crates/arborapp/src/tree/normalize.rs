//! # Normalization
//!
//! Fills in the folder fields a loosely written document may leave out.

use std::sync::Arc;

use crate::model::{NodeKind, NodeRef, TreeNode};

/// Gives every folder a concrete `is_expanded` (default `false`) and a concrete
/// children list (default empty), all the way down. Leaves are passed through
/// as the same handles. Running it twice changes nothing further.
pub fn normalize(nodes: &[NodeRef]) -> Vec<NodeRef> {
    nodes.iter().map(normalize_node).collect()
}

fn normalize_node(node: &NodeRef) -> NodeRef {
    match &node.kind {
        NodeKind::Folder {
            is_expanded,
            children,
        } => Arc::new(TreeNode {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: NodeKind::Folder {
                is_expanded: Some(is_expanded.unwrap_or(false)),
                children: Some(normalize(children.as_deref().unwrap_or(&[]))),
            },
        }),
        _ => Arc::clone(node),
    }
}

/// Whether every folder in the tree already has both fields set.
pub fn is_normalized(nodes: &[NodeRef]) -> bool {
    nodes.iter().all(|node| match &node.kind {
        NodeKind::Folder {
            is_expanded: Some(_),
            children: Some(children),
        } => is_normalized(children),
        NodeKind::Folder { .. } => false,
        _ => true,
    })
}

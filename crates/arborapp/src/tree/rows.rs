//! Depth-first projections of a tree for renderers.
//!
//! Rows keep the document's own sibling order (no sorting) and carry the
//! positional path of each node in the snapshot they were computed from.

use crate::model::NodeRef;

/// One rendered line of a tree.
#[derive(Debug, Clone)]
pub struct Row {
    /// Zero-based depth (`0` for root-level nodes).
    pub depth: usize,
    pub path: Vec<usize>,
    pub node: NodeRef,
}

/// Rows a renderer should show: children are included only below expanded folders.
pub fn visible_rows(nodes: &[NodeRef]) -> Vec<Row> {
    let mut rows = Vec::new();
    push_rows(nodes, &mut Vec::new(), true, &mut rows);
    rows
}

/// Every node, expanded or not.
pub fn all_rows(nodes: &[NodeRef]) -> Vec<Row> {
    let mut rows = Vec::new();
    push_rows(nodes, &mut Vec::new(), false, &mut rows);
    rows
}

fn push_rows(nodes: &[NodeRef], path: &mut Vec<usize>, only_expanded: bool, rows: &mut Vec<Row>) {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        rows.push(Row {
            depth: path.len() - 1,
            path: path.clone(),
            node: NodeRef::clone(node),
        });
        if let Some(children) = node.children() {
            if !only_expanded || node.is_expanded() {
                push_rows(children, path, only_expanded, rows);
            }
        }
        path.pop();
    }
}

/// Derives the current path of the node with `id`, if it is in the tree.
pub fn find_path(nodes: &[NodeRef], id: &str) -> Option<Vec<usize>> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == id {
            return Some(vec![index]);
        }
        if let Some(mut rest) = node.children().and_then(|children| find_path(children, id)) {
            rest.insert(0, index);
            return Some(rest);
        }
    }
    None
}

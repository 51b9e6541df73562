//! # Command Layer
//!
//! The business logic of arbor. Each command lives in its own submodule as a
//! plain `run` function over a [`TreeStore`], and follows the same shape:
//!
//! 1. **Load** the tree snapshot from the store
//! 2. **Apply** one core operation from [`crate::tree`] or [`crate::drag`]
//! 3. **Sync** the full new snapshot back
//!
//! ## Rejections Become Errors
//!
//! The core is total: an unresolvable path yields an unchanged tree, an
//! illegal drop yields `MoveOutcome::Rejected`. Commands turn those into
//! [`ArborError::NodeNotFound`] or [`ArborError::IllegalOperation`] *before*
//! syncing, so a failed command never writes to the store.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], never strings:
//! - `affected_nodes`: nodes touched by the command, with their paths in the new tree
//! - `rows`: flattened rows for listings
//! - `trees`: stored document summaries
//! - `exported`: serialized document (for `export`)
//! - `messages`: leveled messages for the UI to render
//!
//! ## Testing Strategy
//!
//! Command tests run against [`crate::store::memory::InMemoryStore`] seeded
//! with the fixed fixture in `test_utils`.

use crate::error::{ArborError, Result};
use crate::model::NodeRef;
use crate::path::format_path;
use crate::store::{TreeId, TreeStore, TreeSummary};
use crate::tree::{resolve, Row};
use serde::Serialize;

pub mod add;
pub mod create;
pub mod doctor;
pub mod export;
pub mod list;
pub mod move_node;
pub mod remove;
pub mod show;
pub mod toggle;
pub mod trees;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A node paired with its path in the tree the command produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayNode {
    pub path: Vec<usize>,
    pub node: NodeRef,
}

impl DisplayNode {
    pub fn new(path: Vec<usize>, node: NodeRef) -> Self {
        Self { path, node }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub tree_id: Option<TreeId>,
    pub affected_nodes: Vec<DisplayNode>,
    pub rows: Vec<Row>,
    pub trees: Vec<TreeSummary>,
    pub exported: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn for_tree(id: &TreeId) -> Self {
        Self {
            tree_id: Some(id.clone()),
            ..Default::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_node(mut self, path: Vec<usize>, node: NodeRef) -> Self {
        self.affected_nodes.push(DisplayNode::new(path, node));
        self
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }
}

/// Resolves a user-supplied node path, reporting a missing node as an error.
pub(crate) fn node_at<'a>(nodes: &'a [NodeRef], path: &[usize]) -> Result<&'a NodeRef> {
    resolve(nodes, path).ok_or_else(|| ArborError::NodeNotFound(format_path(path)))
}

/// Syncs `nodes` back to the store, logging transient failures.
pub(crate) fn save<S: TreeStore>(store: &mut S, id: &TreeId, nodes: &[NodeRef]) -> Result<()> {
    store.sync_tree(id, nodes).inspect_err(|e| {
        if e.is_transient() {
            log::warn!("sync of {} failed, stored snapshot kept: {}", id, e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_tree;

    #[test]
    fn node_at_reports_display_path() {
        let tree = sample_tree();
        assert_eq!(node_at(&tree, &[0, 1]).unwrap().name, "Guides");
        let err = node_at(&tree, &[0, 4]).unwrap_err();
        assert_eq!(err.to_string(), "Node not found at 1.5");
        assert!(matches!(
            node_at(&tree, &[]),
            Err(ArborError::NodeNotFound(p)) if p == "root"
        ));
    }
}

use crate::commands::{node_at, save, CmdMessage, CmdResult};
use crate::error::{ArborError, Result};
use crate::model::{NodeKind, NodePatch};
use crate::path::format_path;
use crate::store::{TreeId, TreeStore};
use crate::tree;

/// Applies `patch` to the node at `path`.
///
/// Stricter than [`tree::update`]: a missing node, a blank name, or a field
/// the node's kind does not carry is an error and nothing is synced.
pub fn run<S: TreeStore>(
    store: &mut S,
    id: &TreeId,
    path: &[usize],
    patch: &NodePatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        return Err(ArborError::Api("Nothing to update".to_string()));
    }
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(ArborError::Api("Node name cannot be empty".to_string()));
    }

    let nodes = store.fetch_tree(id)?;
    let target = node_at(&nodes, path)?;
    if patch.is_expanded.is_some() && !target.is_folder() {
        return Err(ArborError::IllegalOperation(format!(
            "'{}' is a {} and cannot be expanded or collapsed",
            target.name,
            target.kind.label()
        )));
    }
    if patch.embed_src.is_some() && !matches!(target.kind, NodeKind::Embed { .. }) {
        return Err(ArborError::IllegalOperation(format!(
            "'{}' is a {} and has no embed source",
            target.name,
            target.kind.label()
        )));
    }

    let updated = tree::update(&nodes, path, patch);
    save(store, id, &updated)?;

    let node = node_at(&updated, path)?.clone();
    let mut result = CmdResult::for_tree(id);
    result.add_message(CmdMessage::success(format!(
        "Updated '{}' at {}",
        node.name,
        format_path(path)
    )));
    Ok(result.with_affected_node(path.to_vec(), node))
}

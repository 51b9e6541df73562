use crate::commands::{save, CmdMessage, CmdResult};
use crate::error::{ArborError, Result};
use crate::path::format_path;
use crate::store::{TreeId, TreeStore};
use crate::tree;

/// Detaches the node at `path` together with its subtree.
pub fn run<S: TreeStore>(store: &mut S, id: &TreeId, path: &[usize]) -> Result<CmdResult> {
    let nodes = store.fetch_tree(id)?;
    let (updated, removed) = tree::remove(&nodes, path);
    let removed = removed.ok_or_else(|| ArborError::NodeNotFound(format_path(path)))?;
    save(store, id, &updated)?;

    let count = removed.subtree_len();
    let mut result = CmdResult::for_tree(id);
    result.add_message(CmdMessage::success(if count > 1 {
        format!("Removed '{}' and {} nested node(s)", removed.name, count - 1)
    } else {
        format!("Removed '{}'", removed.name)
    }));
    Ok(result.with_affected_node(path.to_vec(), removed))
}

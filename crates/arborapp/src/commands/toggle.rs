use crate::commands::{node_at, save, CmdMessage, CmdResult};
use crate::error::{ArborError, Result};
use crate::model::NodePatch;
use crate::store::{TreeId, TreeStore};
use crate::tree;

/// Flips a folder between expanded and collapsed.
pub fn run<S: TreeStore>(store: &mut S, id: &TreeId, path: &[usize]) -> Result<CmdResult> {
    let nodes = store.fetch_tree(id)?;
    let target = node_at(&nodes, path)?;
    if !target.is_folder() {
        return Err(ArborError::IllegalOperation(format!(
            "'{}' is a {} and cannot be expanded or collapsed",
            target.name,
            target.kind.label()
        )));
    }

    let expanded = !target.is_expanded();
    let updated = tree::update(&nodes, path, &NodePatch::expanded(expanded));
    save(store, id, &updated)?;

    let node = node_at(&updated, path)?.clone();
    let mut result = CmdResult::for_tree(id);
    result.add_message(CmdMessage::info(format!(
        "'{}' {}",
        node.name,
        if expanded { "expanded" } else { "collapsed" }
    )));
    Ok(result.with_affected_node(path.to_vec(), node))
}

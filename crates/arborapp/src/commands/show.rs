use crate::commands::{node_at, CmdResult};
use crate::error::Result;
use crate::store::{TreeId, TreeStore};

pub fn run<S: TreeStore>(store: &S, id: &TreeId, path: &[usize]) -> Result<CmdResult> {
    let nodes = store.fetch_tree(id)?;
    let node = node_at(&nodes, path)?.clone();
    Ok(CmdResult::for_tree(id).with_affected_node(path.to_vec(), node))
}

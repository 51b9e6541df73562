use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TreeStore;

pub fn run<S: TreeStore>(store: &S) -> Result<CmdResult> {
    let trees = store.list_trees()?;
    let mut result = CmdResult::default();
    if trees.is_empty() {
        result.add_message(CmdMessage::info("No trees yet. Create one with `arbor new`."));
    }
    result.trees = trees;
    Ok(result)
}

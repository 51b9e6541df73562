use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{TreeId, TreeStore};
use crate::tree::{all_rows, visible_rows};

/// Lists the tree as depth-first rows. Collapsed folders hide their children
/// unless `all` is set.
pub fn run<S: TreeStore>(store: &S, id: &TreeId, all: bool) -> Result<CmdResult> {
    let nodes = store.fetch_tree(id)?;
    let rows = if all {
        all_rows(&nodes)
    } else {
        visible_rows(&nodes)
    };

    let mut result = CmdResult::for_tree(id).with_rows(rows);
    if result.rows.is_empty() {
        result.add_message(CmdMessage::info("Tree is empty."));
    }
    Ok(result)
}

use crate::commands::{node_at, save, CmdMessage, CmdResult};
use crate::error::{ArborError, Result};
use crate::model::{TreeNode, DEFAULT_EMBED_NAME, DEFAULT_EMBED_SRC, DEFAULT_FOLDER_NAME};
use crate::path::format_path;
use crate::store::{TreeId, TreeStore};
use crate::tree::mutate::try_insert;
use serde::{Deserialize, Serialize};

/// The kind of node `add` creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewNodeKind {
    Folder,
    Embed,
    File,
}

impl NewNodeKind {
    /// Builds a fresh node. Folders and embeds fall back to the default name
    /// (and source); files must be named.
    pub fn build(self, name: Option<String>, src: Option<String>) -> Result<TreeNode> {
        if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ArborError::Api("Node name cannot be empty".to_string()));
        }
        if src.is_some() && self != NewNodeKind::Embed {
            return Err(ArborError::Api("Only embeds take a source".to_string()));
        }
        let node = match self {
            NewNodeKind::Folder => {
                TreeNode::folder(name.unwrap_or_else(|| DEFAULT_FOLDER_NAME.to_string()))
            }
            NewNodeKind::Embed => TreeNode::embed(
                name.unwrap_or_else(|| DEFAULT_EMBED_NAME.to_string()),
                src.unwrap_or_else(|| DEFAULT_EMBED_SRC.to_string()),
            ),
            NewNodeKind::File => {
                let name =
                    name.ok_or_else(|| ArborError::Api("A file needs a name".to_string()))?;
                TreeNode::file(name)
            }
        };
        Ok(node)
    }
}

/// Inserts `node` under `parent` (the root collection when empty) at `index`,
/// clamped to the parent's child count. `None` appends.
pub fn run<S: TreeStore>(
    store: &mut S,
    id: &TreeId,
    parent: &[usize],
    index: Option<isize>,
    node: TreeNode,
) -> Result<CmdResult> {
    let nodes = store.fetch_tree(id)?;
    if !parent.is_empty() {
        let target = node_at(&nodes, parent)?;
        if !target.is_folder() {
            log::debug!("add under {} rejected: not a folder", format_path(parent));
            return Err(ArborError::IllegalOperation(format!(
                "'{}' is a {} and cannot have children",
                target.name,
                target.kind.label()
            )));
        }
    }

    let node = node.into_ref();
    let (updated, landed) = try_insert(&nodes, parent, index.unwrap_or(isize::MAX), node.clone())
        .ok_or_else(|| ArborError::NodeNotFound(format_path(parent)))?;
    save(store, id, &updated)?;

    let mut path = parent.to_vec();
    path.push(landed);
    let mut result = CmdResult::for_tree(id);
    result.add_message(CmdMessage::success(format!(
        "Added {} '{}' at {}",
        node.kind.label(),
        node.name,
        format_path(&path)
    )));
    Ok(result.with_affected_node(path, node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_store;
    use crate::tree::resolve;

    #[test]
    fn appends_by_default() {
        let (mut store, id) = seeded_store();
        let node = NewNodeKind::File.build(Some("Todo".into()), None).unwrap();
        let result = run(&mut store, &id, &[0], None, node).unwrap();

        assert_eq!(result.affected_nodes[0].path, vec![0, 2]);
        let stored = store.fetch_tree(&id).unwrap();
        assert_eq!(resolve(&stored, &[0, 2]).unwrap().name, "Todo");
    }

    #[test]
    fn inserts_at_index_and_clamps() {
        let (mut store, id) = seeded_store();
        let first = NewNodeKind::Folder.build(None, None).unwrap();
        let result = run(&mut store, &id, &[], Some(0), first).unwrap();
        assert_eq!(result.affected_nodes[0].path, vec![0]);

        let last = NewNodeKind::Embed.build(None, None).unwrap();
        let result = run(&mut store, &id, &[], Some(40), last).unwrap();
        assert_eq!(result.affected_nodes[0].path, vec![3]);

        let stored = store.fetch_tree(&id).unwrap();
        let names: Vec<_> = stored.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec![DEFAULT_FOLDER_NAME, "Docs", "Notes", DEFAULT_EMBED_NAME]);
    }

    #[test]
    fn refuses_leaf_parent_and_keeps_store() {
        let (mut store, id) = seeded_store();
        let before = store.fetch_tree(&id).unwrap();
        let node = NewNodeKind::Folder.build(None, None).unwrap();
        let err = run(&mut store, &id, &[1], None, node).unwrap_err();
        assert!(matches!(err, ArborError::IllegalOperation(_)));
        assert_eq!(store.fetch_tree(&id).unwrap(), before);
    }

    #[test]
    fn missing_parent_is_not_found() {
        let (mut store, id) = seeded_store();
        let node = NewNodeKind::Folder.build(None, None).unwrap();
        assert!(matches!(
            run(&mut store, &id, &[0, 7], None, node),
            Err(ArborError::NodeNotFound(_))
        ));
    }

    #[test]
    fn build_validates_input() {
        assert!(NewNodeKind::File.build(None, None).is_err());
        assert!(NewNodeKind::Folder.build(Some("".into()), None).is_err());
        assert!(NewNodeKind::File
            .build(Some("a".into()), Some("<iframe/>".into()))
            .is_err());
        let embed = NewNodeKind::Embed
            .build(Some("Clip".into()), Some("<iframe/>".into()))
            .unwrap();
        assert_eq!(embed.embed_src(), Some("<iframe/>"));
    }
}

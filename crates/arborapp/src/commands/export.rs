use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArborError, Result};
use crate::store::{TreeId, TreeStore};

/// Serializes the whole document to pretty JSON in the interchange format.
pub fn run<S: TreeStore>(store: &S, id: &TreeId) -> Result<CmdResult> {
    let nodes = store.fetch_tree(id)?;
    let json = serde_json::to_string_pretty(&nodes).map_err(ArborError::Serialization)?;

    let mut result = CmdResult::for_tree(id);
    if nodes.is_empty() {
        result.add_message(CmdMessage::info("Tree is empty."));
    }
    result.exported = Some(json);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeRef;
    use crate::test_utils::{sample_tree, seeded_store};

    #[test]
    fn exports_parseable_json() {
        let (store, id) = seeded_store();
        let result = run(&store, &id).unwrap();
        let json = result.exported.unwrap();
        assert!(json.contains("\"kind\": \"folder\""));
        assert!(json.contains("\"isExpanded\": true"));
        assert!(json.contains("\"embedSrc\""));

        let parsed: Vec<NodeRef> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_tree());
    }
}

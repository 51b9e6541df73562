use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArborError, Result};
use crate::model::initial_tree;
use crate::store::TreeStore;

/// Creates a new document from the starter template.
pub fn run<S: TreeStore>(store: &mut S, name: Option<String>) -> Result<CmdResult> {
    let name = match name {
        Some(name) if name.trim().is_empty() => {
            return Err(ArborError::Api("Tree name cannot be empty".to_string()))
        }
        other => other,
    };
    let nodes = initial_tree(name);
    let id = store.create_tree(&nodes)?;

    let mut result = CmdResult::for_tree(&id).with_affected_node(vec![0], nodes[0].clone());
    result.add_message(CmdMessage::success(format!(
        "Tree created: {} ({})",
        nodes[0].name, id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_TREE_NAME;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_template_tree() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, None).unwrap();

        let id = result.tree_id.unwrap();
        let stored = store.fetch_tree(&id).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, DEFAULT_TREE_NAME);
        assert_eq!(result.affected_nodes[0].path, vec![0]);
        assert!(result.messages[0].content.contains(id.as_str()));
    }

    #[test]
    fn uses_given_name() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, Some("Research".into())).unwrap();
        assert_eq!(result.affected_nodes[0].node.name, "Research");
    }

    #[test]
    fn rejects_blank_name() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, Some("  ".into())),
            Err(ArborError::Api(_))
        ));
        assert!(store.is_empty());
    }
}

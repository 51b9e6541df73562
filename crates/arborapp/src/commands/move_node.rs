use crate::commands::{save, CmdMessage, CmdResult};
use crate::drag::{self, DropIndicator, MoveOutcome, MoveRejection};
use crate::error::{ArborError, Result};
use crate::path::format_path;
use crate::store::{TreeId, TreeStore};
use crate::tree::resolve;

/// Moves the node at `source` to the place described by `indicator`, using the
/// same rules as an interactive drop.
pub fn run<S: TreeStore>(
    store: &mut S,
    id: &TreeId,
    source: &[usize],
    indicator: &DropIndicator,
) -> Result<CmdResult> {
    let nodes = store.fetch_tree(id)?;
    let (updated, outcome) = drag::move_node(&nodes, source, indicator);

    let new_path = match outcome {
        MoveOutcome::Moved { new_path } => new_path,
        MoveOutcome::Rejected(rejection) => {
            log::debug!(
                "move {} -> {} {} rejected: {}",
                format_path(source),
                indicator.position,
                format_path(&indicator.target_path),
                rejection
            );
            return Err(rejection_error(rejection, source, indicator));
        }
    };
    save(store, id, &updated)?;

    let node = resolve(&updated, &new_path)
        .cloned()
        .ok_or_else(|| ArborError::NodeNotFound(format_path(&new_path)))?;
    let mut result = CmdResult::for_tree(id);
    result.add_message(CmdMessage::success(format!(
        "Moved '{}' from {} to {}",
        node.name,
        format_path(source),
        format_path(&new_path)
    )));
    Ok(result.with_affected_node(new_path, node))
}

fn rejection_error(
    rejection: MoveRejection,
    source: &[usize],
    indicator: &DropIndicator,
) -> ArborError {
    match rejection {
        MoveRejection::SourceNotFound => ArborError::NodeNotFound(format_path(source)),
        MoveRejection::TargetNotFound => {
            ArborError::NodeNotFound(format_path(&indicator.target_path))
        }
        other => ArborError::IllegalOperation(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_store;

    fn ids(nodes: &[crate::model::NodeRef]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn moves_into_folder() {
        let (mut store, id) = seeded_store();
        let result = run(&mut store, &id, &[1], &DropIndicator::inside(vec![0, 1])).unwrap();

        assert_eq!(result.affected_nodes[0].path, vec![0, 1, 1]);
        assert_eq!(result.affected_nodes[0].node.id, "file-notes");
        let stored = store.fetch_tree(&id).unwrap();
        assert_eq!(ids(&stored), vec!["folder-docs"]);
    }

    #[test]
    fn moves_before_earlier_sibling() {
        let (mut store, id) = seeded_store();
        let result = run(&mut store, &id, &[1], &DropIndicator::before(vec![0])).unwrap();
        assert_eq!(result.affected_nodes[0].path, vec![0]);
        let stored = store.fetch_tree(&id).unwrap();
        assert_eq!(ids(&stored), vec!["file-notes", "folder-docs"]);
    }

    #[test]
    fn moves_out_to_root() {
        let (mut store, id) = seeded_store();
        let result = run(&mut store, &id, &[0, 1, 0], &DropIndicator::root()).unwrap();
        assert_eq!(result.affected_nodes[0].path, vec![2]);
    }

    #[test]
    fn rejects_drop_into_own_descendant() {
        let (mut store, id) = seeded_store();
        let before = store.fetch_tree(&id).unwrap();
        let err = run(&mut store, &id, &[0], &DropIndicator::inside(vec![0, 1])).unwrap_err();
        assert!(matches!(err, ArborError::IllegalOperation(_)));
        assert_eq!(store.fetch_tree(&id).unwrap(), before);
    }

    #[test]
    fn rejects_missing_paths_as_not_found() {
        let (mut store, id) = seeded_store();
        assert!(matches!(
            run(&mut store, &id, &[4], &DropIndicator::before(vec![0])),
            Err(ArborError::NodeNotFound(p)) if p == "5"
        ));
        assert!(matches!(
            run(&mut store, &id, &[1], &DropIndicator::after(vec![0, 3])),
            Err(ArborError::NodeNotFound(p)) if p == "1.4"
        ));
    }

    #[test]
    fn rejects_drop_inside_leaf() {
        let (mut store, id) = seeded_store();
        assert!(matches!(
            run(&mut store, &id, &[0, 1], &DropIndicator::inside(vec![1])),
            Err(ArborError::IllegalOperation(_))
        ));
    }
}

//! # Drag and Drop
//!
//! Moving a node is a remove followed by an insert, plus the checks that keep
//! the result a tree.
//!
//! ## Drop Indicators
//!
//! While a node is dragged, the renderer asks where it would land. The answer
//! is a [`DropIndicator`]: a target path and a [`DropPosition`] relative to it.
//!
//! | Position | Lands |
//! |----------|-------|
//! | `Before` | as the sibling immediately preceding the target |
//! | `After`  | as the sibling immediately following the target |
//! | `Inside` | as the last child of the target folder |
//!
//! `Inside` with an empty target path means the root collection.
//!
//! ## Legality
//!
//! Checked against the tree as it is *before* the move, by comparing paths:
//!
//! - the source must exist;
//! - the target may not be the source itself;
//! - the target may not lie inside the source's subtree;
//! - the target must exist, and `Inside` needs a folder.
//!
//! ## Index Shift
//!
//! Detaching the source shifts every later sibling left by one. A target path
//! captured before the move that routes through such a sibling is adjusted
//! with [`crate::path::adjust_after_removal`] before the insert.
//!
//! ## Interactive State
//!
//! [`DragState`] holds the dragged path and the currently accepted indicator.
//! `hover` only keeps indicators that pass the legality check, so whatever it
//! holds can be highlighted as a valid drop.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::NodeRef;
use crate::path::{adjust_after_removal, is_strict_descendant, split_parent};
use crate::tree::mutate::try_insert;
use crate::tree::{remove, resolve, resolve_children};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Before,
    After,
    #[serde(alias = "child")]
    Inside,
}

impl fmt::Display for DropPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropPosition::Before => write!(f, "before"),
            DropPosition::After => write!(f, "after"),
            DropPosition::Inside => write!(f, "inside"),
        }
    }
}

/// Where a dragged node would land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropIndicator {
    pub target_path: Vec<usize>,
    pub position: DropPosition,
}

impl DropIndicator {
    pub fn new(target_path: Vec<usize>, position: DropPosition) -> Self {
        Self {
            target_path,
            position,
        }
    }

    pub fn before(target_path: Vec<usize>) -> Self {
        Self::new(target_path, DropPosition::Before)
    }

    pub fn after(target_path: Vec<usize>) -> Self {
        Self::new(target_path, DropPosition::After)
    }

    pub fn inside(target_path: Vec<usize>) -> Self {
        Self::new(target_path, DropPosition::Inside)
    }

    /// Append to the root collection.
    pub fn root() -> Self {
        Self::inside(Vec::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    SourceNotFound,
    OntoSelf,
    IntoDescendant,
    TargetNotFound,
    TargetNotFolder,
    NoDragInProgress,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MoveRejection::SourceNotFound => "source node not found",
            MoveRejection::OntoSelf => "cannot drop a node onto itself",
            MoveRejection::IntoDescendant => "cannot drop a node into its own descendant",
            MoveRejection::TargetNotFound => "drop target not found",
            MoveRejection::TargetNotFolder => "only folders can receive children",
            MoveRejection::NoDragInProgress => "no drag in progress",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The node now lives at `new_path` in the returned tree.
    Moved { new_path: Vec<usize> },
    /// The returned tree is the input tree.
    Rejected(MoveRejection),
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Decides whether dropping the node at `source` on `indicator` is legal in
/// the current (pre-move) tree.
pub fn check_move(
    nodes: &[NodeRef],
    source: &[usize],
    indicator: &DropIndicator,
) -> Result<(), MoveRejection> {
    if resolve(nodes, source).is_none() {
        return Err(MoveRejection::SourceNotFound);
    }
    let target = indicator.target_path.as_slice();
    if target == source {
        return Err(MoveRejection::OntoSelf);
    }
    if is_strict_descendant(target, source) {
        return Err(MoveRejection::IntoDescendant);
    }
    if target.is_empty() {
        return match indicator.position {
            DropPosition::Inside => Ok(()),
            DropPosition::Before | DropPosition::After => Err(MoveRejection::TargetNotFound),
        };
    }
    let target_node = resolve(nodes, target).ok_or(MoveRejection::TargetNotFound)?;
    if indicator.position == DropPosition::Inside && !target_node.is_folder() {
        return Err(MoveRejection::TargetNotFolder);
    }
    Ok(())
}

/// Moves the node at `source` to the place `indicator` describes.
///
/// Rejected moves return the input tree unchanged along with the reason.
pub fn move_node(
    nodes: &[NodeRef],
    source: &[usize],
    indicator: &DropIndicator,
) -> (Vec<NodeRef>, MoveOutcome) {
    if let Err(reason) = check_move(nodes, source, indicator) {
        return (nodes.to_vec(), MoveOutcome::Rejected(reason));
    }

    let (intermediate, detached) = remove(nodes, source);
    let Some(detached) = detached else {
        return (
            nodes.to_vec(),
            MoveOutcome::Rejected(MoveRejection::SourceNotFound),
        );
    };

    let target = adjust_after_removal(&indicator.target_path, source);
    let Some((base, index)) = insertion_point(&intermediate, &target, indicator.position) else {
        return (
            nodes.to_vec(),
            MoveOutcome::Rejected(MoveRejection::TargetNotFound),
        );
    };

    match try_insert(&intermediate, &base, index, detached) {
        Some((tree, landed)) => {
            let mut new_path = base;
            new_path.push(landed);
            (tree, MoveOutcome::Moved { new_path })
        }
        None => (
            nodes.to_vec(),
            MoveOutcome::Rejected(MoveRejection::TargetNotFolder),
        ),
    }
}

/// The collection path and index an insert should use, computed against the
/// tree with the source already removed.
fn insertion_point(
    nodes: &[NodeRef],
    target: &[usize],
    position: DropPosition,
) -> Option<(Vec<usize>, isize)> {
    match position {
        DropPosition::Inside => {
            let len = resolve_children(nodes, target)?.len();
            Some((target.to_vec(), len as isize))
        }
        DropPosition::Before | DropPosition::After => {
            let (parent, index) = split_parent(target)?;
            let offset = if position == DropPosition::After { 1 } else { 0 };
            Some((parent.to_vec(), index as isize + offset))
        }
    }
}

/// Bookkeeping for an interactive drag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragState {
    dragged_path: Option<Vec<usize>>,
    drop_indicator: Option<DropIndicator>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging the node at `path`, dropping any previous indicator.
    pub fn begin(&mut self, path: Vec<usize>) {
        self.dragged_path = Some(path);
        self.drop_indicator = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged_path.is_some()
    }

    pub fn dragged_path(&self) -> Option<&[usize]> {
        self.dragged_path.as_deref()
    }

    /// The indicator a renderer should highlight, if the hovered spot is a legal drop.
    pub fn drop_indicator(&self) -> Option<&DropIndicator> {
        self.drop_indicator.as_ref()
    }

    /// Records `indicator` when dropping there would be legal, clears it
    /// otherwise. Returns whether it was accepted.
    pub fn hover(&mut self, nodes: &[NodeRef], indicator: DropIndicator) -> bool {
        let Some(source) = self.dragged_path.as_deref() else {
            return false;
        };
        if check_move(nodes, source, &indicator).is_ok() {
            self.drop_indicator = Some(indicator);
            true
        } else {
            self.drop_indicator = None;
            false
        }
    }

    /// Finishes the drag and performs the move. The state is reset whatever
    /// the outcome.
    pub fn drop(&mut self, nodes: &[NodeRef]) -> (Vec<NodeRef>, MoveOutcome) {
        let source = self.dragged_path.take();
        let indicator = self.drop_indicator.take();
        match (source, indicator) {
            (Some(source), Some(indicator)) => move_node(nodes, &source, &indicator),
            _ => (
                nodes.to_vec(),
                MoveOutcome::Rejected(MoveRejection::NoDragInProgress),
            ),
        }
    }

    pub fn cancel(&mut self) {
        self.dragged_path = None;
        self.drop_indicator = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TreeNode;
    use std::sync::Arc;

    fn leaf(name: &str) -> NodeRef {
        TreeNode::file(name).into_ref()
    }

    fn folder(name: &str, children: Vec<NodeRef>) -> NodeRef {
        TreeNode::folder(name).with_children(children).into_ref()
    }

    fn names(nodes: &[NodeRef]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    fn unchanged(before: &[NodeRef], after: &[NodeRef]) -> bool {
        before.len() == after.len() && before.iter().zip(after).all(|(a, b)| Arc::ptr_eq(a, b))
    }

    /// A{ B{ C } }
    fn chain() -> Vec<NodeRef> {
        vec![folder("A", vec![folder("B", vec![leaf("C")])])]
    }

    #[test]
    fn test_reject_drop_into_own_descendant() {
        let tree = chain();
        let (after, outcome) = move_node(&tree, &[0], &DropIndicator::inside(vec![0, 0, 0]));
        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::IntoDescendant));
        assert!(unchanged(&tree, &after));

        let (after, outcome) = move_node(&tree, &[0], &DropIndicator::before(vec![0, 0]));
        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::IntoDescendant));
        assert!(unchanged(&tree, &after));
    }

    #[test]
    fn test_reject_drop_onto_self() {
        let tree = chain();
        for position in [DropPosition::Before, DropPosition::After, DropPosition::Inside] {
            let (after, outcome) =
                move_node(&tree, &[0, 0], &DropIndicator::new(vec![0, 0], position));
            assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::OntoSelf));
            assert!(unchanged(&tree, &after));
        }
    }

    #[test]
    fn test_reject_missing_source_and_target() {
        let tree = chain();
        let (_, outcome) = move_node(&tree, &[3], &DropIndicator::root());
        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::SourceNotFound));
        let (_, outcome) = move_node(&tree, &[], &DropIndicator::root());
        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::SourceNotFound));
        let (_, outcome) = move_node(&tree, &[0, 0, 0], &DropIndicator::after(vec![4]));
        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::TargetNotFound));
        let (_, outcome) = move_node(&tree, &[0, 0, 0], &DropIndicator::before(vec![]));
        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::TargetNotFound));
    }

    #[test]
    fn test_reject_inside_leaf() {
        let tree = vec![leaf("x"), leaf("y")];
        let (after, outcome) = move_node(&tree, &[0], &DropIndicator::inside(vec![1]));
        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::TargetNotFolder));
        assert!(unchanged(&tree, &after));
    }

    #[test]
    fn test_move_after_later_sibling_adjusts_index() {
        let tree = vec![leaf("A"), leaf("B"), leaf("C")];
        let (after, outcome) = move_node(&tree, &[0], &DropIndicator::after(vec![2]));
        assert_eq!(names(&after), vec!["B", "C", "A"]);
        assert_eq!(outcome, MoveOutcome::Moved { new_path: vec![2] });
    }

    #[test]
    fn test_move_before_earlier_sibling() {
        let tree = vec![leaf("A"), leaf("B"), leaf("C")];
        let (after, outcome) = move_node(&tree, &[2], &DropIndicator::before(vec![0]));
        assert_eq!(names(&after), vec!["C", "A", "B"]);
        assert_eq!(outcome, MoveOutcome::Moved { new_path: vec![0] });
    }

    #[test]
    fn test_move_into_folder_behind_source_adjusts_route() {
        // [X, F{ a }] : drag X inside F, F shifts from [1] to [0].
        let tree = vec![leaf("X"), folder("F", vec![leaf("a")])];
        let (after, outcome) = move_node(&tree, &[0], &DropIndicator::inside(vec![1]));
        assert_eq!(names(&after), vec!["F"]);
        assert_eq!(names(after[0].children().unwrap()), vec!["a", "X"]);
        assert_eq!(outcome, MoveOutcome::Moved { new_path: vec![0, 1] });
    }

    #[test]
    fn test_move_deep_node_to_root() {
        let tree = chain();
        let (after, outcome) = move_node(&tree, &[0, 0, 0], &DropIndicator::root());
        assert_eq!(names(&after), vec!["A", "C"]);
        assert_eq!(resolve(&after, &[0, 0]).unwrap().children().unwrap().len(), 0);
        assert_eq!(outcome, MoveOutcome::Moved { new_path: vec![1] });
    }

    #[test]
    fn test_move_child_out_before_its_parent() {
        let tree = chain();
        let (after, outcome) = move_node(&tree, &[0, 0], &DropIndicator::before(vec![0]));
        assert_eq!(names(&after), vec!["B", "A"]);
        assert_eq!(outcome, MoveOutcome::Moved { new_path: vec![0] });
        assert!(after[1].children().unwrap().is_empty());
    }

    #[test]
    fn test_move_keeps_unrelated_subtrees_shared() {
        let other = folder("Other", vec![leaf("o")]);
        let tree = vec![leaf("A"), leaf("B"), other];
        let (after, _) = move_node(&tree, &[0], &DropIndicator::after(vec![1]));
        assert_eq!(names(&after), vec!["B", "A", "Other"]);
        assert!(Arc::ptr_eq(&tree[2], &after[2]));
        assert!(Arc::ptr_eq(&tree[0], &after[1]));
    }

    #[test]
    fn test_drag_state_lifecycle() {
        let tree = vec![leaf("A"), folder("F", vec![])];
        let mut drag = DragState::new();
        assert!(!drag.hover(&tree, DropIndicator::inside(vec![1])));

        drag.begin(vec![0]);
        assert!(drag.is_dragging());
        assert!(!drag.hover(&tree, DropIndicator::inside(vec![0])));
        assert!(drag.drop_indicator().is_none());

        assert!(drag.hover(&tree, DropIndicator::inside(vec![1])));
        assert_eq!(drag.drop_indicator(), Some(&DropIndicator::inside(vec![1])));

        let (after, outcome) = drag.drop(&tree);
        assert_eq!(outcome, MoveOutcome::Moved { new_path: vec![0, 0] });
        assert_eq!(names(after[0].children().unwrap()), vec!["A"]);
        assert!(!drag.is_dragging());
        assert!(drag.drop_indicator().is_none());
    }

    #[test]
    fn test_drop_without_indicator_is_rejected() {
        let tree = vec![leaf("A")];
        let mut drag = DragState::new();
        drag.begin(vec![0]);
        let (after, outcome) = drag.drop(&tree);
        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::NoDragInProgress));
        assert!(unchanged(&tree, &after));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_cancel_clears_state() {
        let tree = vec![leaf("A"), leaf("B")];
        let mut drag = DragState::new();
        drag.begin(vec![0]);
        drag.hover(&tree, DropIndicator::after(vec![1]));
        drag.cancel();
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn test_indicator_wire_shape() {
        let value = serde_json::to_value(DropIndicator::inside(vec![0, 2])).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "targetPath": [0, 2], "position": "inside" })
        );
        let legacy: DropIndicator =
            serde_json::from_value(serde_json::json!({ "targetPath": [1], "position": "child" }))
                .unwrap();
        assert_eq!(legacy.position, DropPosition::Inside);
    }
}

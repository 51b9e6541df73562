//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs**: user paths such as `"1.2"` become `[0, 1]`, tree
//!   ids are validated, 1-based positions become clamped insert indexes
//! - **Returns** `Result<CmdResult>`
//!
//! It holds no business logic and performs no terminal I/O.
//!
//! ## Generic Over TreeStore
//!
//! `ArborApi<S: TreeStore>` runs on `FileStore` in production and
//! `InMemoryStore` in tests.

use crate::commands::{self, add::NewNodeKind, CmdResult};
use crate::drag::{DropIndicator, DropPosition};
use crate::error::{ArborError, Result};
use crate::model::NodePatch;
use crate::path::parse_path;
use crate::store::{TreeId, TreeStore};

/// The main API facade for arbor operations.
pub struct ArborApi<S: TreeStore> {
    store: S,
}

/// Where `move_node` should put the source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTarget<'a> {
    /// Relative to the node at a user path.
    Node { path: &'a str, position: DropPosition },
    /// Appended to the root collection.
    Root,
}

impl<S: TreeStore> ArborApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_tree(&mut self, name: Option<String>) -> Result<CmdResult> {
        commands::create::run(&mut self.store, name)
    }

    pub fn list_trees(&self) -> Result<CmdResult> {
        commands::trees::run(&self.store)
    }

    pub fn list_nodes(&self, tree: &str, all: bool) -> Result<CmdResult> {
        commands::list::run(&self.store, &TreeId::parse(tree)?, all)
    }

    pub fn show_node(&self, tree: &str, path: &str) -> Result<CmdResult> {
        commands::show::run(&self.store, &TreeId::parse(tree)?, &parse_path(path)?)
    }

    /// Adds a node under `parent` (`""` or `"root"` for the root collection).
    /// `position` is 1-based; `None` appends.
    pub fn add_node(
        &mut self,
        tree: &str,
        kind: NewNodeKind,
        parent: &str,
        position: Option<usize>,
        name: Option<String>,
        src: Option<String>,
    ) -> Result<CmdResult> {
        let id = TreeId::parse(tree)?;
        let parent = parse_path(parent)?;
        let index = match position {
            Some(0) => return Err(ArborError::Api("Positions start at 1".to_string())),
            Some(n) => Some(isize::try_from(n - 1).unwrap_or(isize::MAX)),
            None => None,
        };
        let node = kind.build(name, src)?;
        commands::add::run(&mut self.store, &id, &parent, index, node)
    }

    pub fn update_node(&mut self, tree: &str, path: &str, patch: &NodePatch) -> Result<CmdResult> {
        let id = TreeId::parse(tree)?;
        commands::update::run(&mut self.store, &id, &parse_path(path)?, patch)
    }

    pub fn rename_node(&mut self, tree: &str, path: &str, name: &str) -> Result<CmdResult> {
        self.update_node(tree, path, &NodePatch::rename(name))
    }

    pub fn set_expanded(&mut self, tree: &str, path: &str, expanded: bool) -> Result<CmdResult> {
        self.update_node(tree, path, &NodePatch::expanded(expanded))
    }

    pub fn set_embed_src(&mut self, tree: &str, path: &str, src: &str) -> Result<CmdResult> {
        self.update_node(tree, path, &NodePatch::embed_src(src))
    }

    pub fn toggle_node(&mut self, tree: &str, path: &str) -> Result<CmdResult> {
        let id = TreeId::parse(tree)?;
        commands::toggle::run(&mut self.store, &id, &parse_path(path)?)
    }

    pub fn remove_node(&mut self, tree: &str, path: &str) -> Result<CmdResult> {
        let id = TreeId::parse(tree)?;
        commands::remove::run(&mut self.store, &id, &parse_path(path)?)
    }

    pub fn move_node(
        &mut self,
        tree: &str,
        source: &str,
        target: MoveTarget<'_>,
    ) -> Result<CmdResult> {
        let id = TreeId::parse(tree)?;
        let source = parse_path(source)?;
        let indicator = match target {
            MoveTarget::Root => DropIndicator::root(),
            MoveTarget::Node { path, position } => {
                let target_path = parse_path(path)?;
                if target_path.is_empty() {
                    return Err(ArborError::Api(
                        "Use the root target to move a node to the top level".to_string(),
                    ));
                }
                DropIndicator::new(target_path, position)
            }
        };
        commands::move_node::run(&mut self.store, &id, &source, &indicator)
    }

    pub fn doctor(&mut self, tree: &str, fix: bool) -> Result<CmdResult> {
        let id = TreeId::parse(tree)?;
        commands::doctor::run(&mut self.store, &id, fix)
    }

    pub fn export_tree(&self, tree: &str) -> Result<CmdResult> {
        commands::export::run(&self.store, &TreeId::parse(tree)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::seeded_store;
    use crate::tree::resolve;

    fn api() -> (ArborApi<InMemoryStore>, String) {
        let (store, id) = seeded_store();
        (ArborApi::new(store), id.to_string())
    }

    #[test]
    fn create_then_list() {
        let mut api = ArborApi::new(InMemoryStore::new());
        let created = api.create_tree(Some("Plans".into())).unwrap();
        let tree = created.tree_id.unwrap().to_string();

        let listed = api.list_nodes(&tree, false).unwrap();
        assert_eq!(listed.rows[0].node.name, "Plans");
        assert_eq!(api.list_trees().unwrap().trees.len(), 1);
    }

    #[test]
    fn paths_are_one_based() {
        let (api, tree) = api();
        let result = api.show_node(&tree, "1.2.1").unwrap();
        assert_eq!(result.affected_nodes[0].node.id, "file-setup");
    }

    #[test]
    fn bad_path_syntax_is_api_error() {
        let (api, tree) = api();
        assert!(matches!(api.show_node(&tree, "1.x"), Err(ArborError::Api(_))));
        assert!(matches!(api.show_node(&tree, "0"), Err(ArborError::Api(_))));
    }

    #[test]
    fn bad_tree_id_is_api_error() {
        let (api, _) = api();
        assert!(matches!(
            api.list_nodes("../../etc", false),
            Err(ArborError::Api(_))
        ));
    }

    #[test]
    fn add_converts_position() {
        let (mut api, tree) = api();
        let result = api
            .add_node(&tree, NewNodeKind::File, "1", Some(1), Some("First".into()), None)
            .unwrap();
        assert_eq!(result.affected_nodes[0].path, vec![0, 0]);

        assert!(matches!(
            api.add_node(&tree, NewNodeKind::Folder, "", Some(0), None, None),
            Err(ArborError::Api(_))
        ));
    }

    #[test]
    fn add_to_root() {
        let (mut api, tree) = api();
        let result = api
            .add_node(&tree, NewNodeKind::Folder, "root", None, None, None)
            .unwrap();
        assert_eq!(result.affected_nodes[0].path, vec![2]);
    }

    #[test]
    fn update_helpers_dispatch() {
        let (mut api, tree) = api();
        api.rename_node(&tree, "2", "Journal").unwrap();
        api.set_expanded(&tree, "1.2", true).unwrap();
        api.set_embed_src(&tree, "1.1", "<iframe/>").unwrap();
        api.toggle_node(&tree, "1").unwrap();

        let id = TreeId::parse(&tree).unwrap();
        let stored = api.store().fetch_tree(&id).unwrap();
        assert_eq!(stored[1].name, "Journal");
        assert!(resolve(&stored, &[0, 1]).unwrap().is_expanded());
        assert_eq!(resolve(&stored, &[0, 0]).unwrap().embed_src(), Some("<iframe/>"));
        assert!(!stored[0].is_expanded());
    }

    #[test]
    fn move_dispatches_targets() {
        let (mut api, tree) = api();
        let result = api
            .move_node(
                &tree,
                "2",
                MoveTarget::Node {
                    path: "1.1",
                    position: DropPosition::After,
                },
            )
            .unwrap();
        assert_eq!(result.affected_nodes[0].path, vec![0, 1]);

        let result = api.move_node(&tree, "1.2", MoveTarget::Root).unwrap();
        assert_eq!(result.affected_nodes[0].path, vec![1]);

        assert!(matches!(
            api.move_node(
                &tree,
                "1",
                MoveTarget::Node {
                    path: "root",
                    position: DropPosition::Before
                }
            ),
            Err(ArborError::Api(_))
        ));
    }

    #[test]
    fn remove_doctor_export() {
        let (mut api, tree) = api();
        api.remove_node(&tree, "1.2").unwrap();
        let doctor = api.doctor(&tree, false).unwrap();
        assert!(doctor.messages[0].content.contains("No inconsistencies"));
        let export = api.export_tree(&tree).unwrap();
        assert!(!export.exported.unwrap().contains("file-setup"));
    }

    #[test]
    fn sync_failure_surfaces_as_transient() {
        let (mut api, tree) = api();
        api.store().set_simulate_sync_error(true);
        let err = api.remove_node(&tree, "2").unwrap_err();
        assert!(err.is_transient());

        api.store().set_simulate_sync_error(false);
        api.remove_node(&tree, "2").unwrap();
    }
}

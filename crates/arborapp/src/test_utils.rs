use crate::model::{NodeKind, NodeRef, TreeNode};
use crate::store::memory::InMemoryStore;
use crate::store::{TreeId, TreeStore};

fn node(id: &str, name: &str, kind: NodeKind) -> NodeRef {
    TreeNode {
        id: id.to_string(),
        name: name.to_string(),
        kind,
    }
    .into_ref()
}

fn folder(id: &str, name: &str, expanded: bool, children: Vec<NodeRef>) -> NodeRef {
    node(
        id,
        name,
        NodeKind::Folder {
            is_expanded: Some(expanded),
            children: Some(children),
        },
    )
}

/// Fixed-id fixture:
///
/// ```text
/// 1     Docs/        (expanded)
/// 1.1     Intro      (embed)
/// 1.2     Guides/    (collapsed)
/// 1.2.1     Setup    (file)
/// 2     Notes        (file)
/// ```
pub fn sample_tree() -> Vec<NodeRef> {
    let setup = node("file-setup", "Setup", NodeKind::File {});
    let guides = folder("folder-guides", "Guides", false, vec![setup]);
    let intro = node(
        "embed-intro",
        "Intro",
        NodeKind::Embed {
            embed_src: "<iframe src=\"about:blank\"></iframe>".to_string(),
        },
    );
    let docs = folder("folder-docs", "Docs", true, vec![intro, guides]);
    let notes = node("file-notes", "Notes", NodeKind::File {});
    vec![docs, notes]
}

/// An in-memory store holding [`sample_tree`].
pub fn seeded_store() -> (InMemoryStore, TreeId) {
    let mut store = InMemoryStore::new();
    let id = store
        .create_tree(&sample_tree())
        .expect("in-memory create cannot fail");
    (store, id)
}

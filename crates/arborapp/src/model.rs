//! # Domain Model: Nodes, Kinds and Patches
//!
//! A document is an ordered collection of root [`TreeNode`]s. Each node has an
//! immutable `id`, a display `name`, and a [`NodeKind`] that decides what else
//! it carries:
//!
//! | Kind | Children | Payload |
//! |------|----------|---------|
//! | `folder` | yes (`children`, `isExpanded`) | none |
//! | `embed` | no | `embedSrc` |
//! | `file` | no | none |
//!
//! ## Shared Handles
//!
//! Children are stored as [`NodeRef`] (`Arc<TreeNode>`). Edits never touch an
//! existing node; they build a new node for each ancestor on the edited route
//! and clone the handles of everything else. Two versions of a document
//! therefore share every subtree the edit did not reach.
//!
//! ## Optional Folder Fields
//!
//! Documents coming from the wire may omit `isExpanded` and `children` on
//! folders. The model keeps them as `Option` so that a fetched document
//! round-trips unchanged; [`crate::tree::normalize`] fills in the defaults.
//!
//! ## Wire Shape
//!
//! ```json
//! { "id": "folder-4c1d0e9b2a7f", "name": "Docs", "kind": "folder",
//!   "isExpanded": true, "children": [] }
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Shared handle to an immutable node.
pub type NodeRef = Arc<TreeNode>;

pub const DEFAULT_FOLDER_NAME: &str = "New Folder";
pub const DEFAULT_EMBED_NAME: &str = "New Embed";
pub const DEFAULT_EMBED_SRC: &str =
    r#"<iframe width="560" height="315" src="about:blank" title="Embedded content" frameborder="0" allowfullscreen></iframe>"#;
pub const DEFAULT_TREE_NAME: &str = "My New Tree";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeKind {
    Folder {
        #[serde(
            rename = "isExpanded",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        is_expanded: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        children: Option<Vec<NodeRef>>,
    },
    Embed {
        #[serde(rename = "embedSrc", default)]
        embed_src: String,
    },
    File {},
}

impl NodeKind {
    /// Short lowercase label, matching the serialized tag.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Folder { .. } => "folder",
            NodeKind::Embed { .. } => "embed",
            NodeKind::File {} => "file",
        }
    }
}

/// Generates a fresh node id such as `folder-4c1d0e9b2a7f`.
pub fn new_node_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &hex[..12])
}

impl TreeNode {
    /// A collapsed, empty folder with a fresh id.
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            id: new_node_id("folder"),
            name: name.into(),
            kind: NodeKind::Folder {
                is_expanded: Some(false),
                children: Some(Vec::new()),
            },
        }
    }

    /// An embed leaf with a fresh id.
    pub fn embed(name: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: new_node_id("embed"),
            name: name.into(),
            kind: NodeKind::Embed {
                embed_src: src.into(),
            },
        }
    }

    /// A file leaf with a fresh id.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            id: new_node_id("file"),
            name: name.into(),
            kind: NodeKind::File {},
        }
    }

    pub fn default_folder() -> Self {
        Self::folder(DEFAULT_FOLDER_NAME)
    }

    pub fn default_embed() -> Self {
        Self::embed(DEFAULT_EMBED_NAME, DEFAULT_EMBED_SRC)
    }

    /// Wraps the node in a shared handle.
    pub fn into_ref(self) -> NodeRef {
        Arc::new(self)
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// Expanded state; leaves and folders with no recorded state read as collapsed.
    pub fn is_expanded(&self) -> bool {
        match &self.kind {
            NodeKind::Folder { is_expanded, .. } => is_expanded.unwrap_or(false),
            _ => false,
        }
    }

    /// Children of a folder (empty when the folder has none recorded), `None` for leaves.
    pub fn children(&self) -> Option<&[NodeRef]> {
        match &self.kind {
            NodeKind::Folder { children, .. } => Some(children.as_deref().unwrap_or(&[])),
            _ => None,
        }
    }

    pub fn embed_src(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Embed { embed_src } => Some(embed_src),
            _ => None,
        }
    }

    /// Returns a copy of this folder holding `children`. Leaves come back unchanged.
    pub fn with_children(&self, children: Vec<NodeRef>) -> Self {
        match &self.kind {
            NodeKind::Folder { is_expanded, .. } => Self {
                id: self.id.clone(),
                name: self.name.clone(),
                kind: NodeKind::Folder {
                    is_expanded: *is_expanded,
                    children: Some(children),
                },
            },
            _ => self.clone(),
        }
    }

    /// Returns a copy with `patch` merged in. Fields that do not apply to this
    /// kind are ignored; the id never changes.
    pub fn patched(&self, patch: &NodePatch) -> Self {
        let mut node = self.clone();
        if let Some(name) = &patch.name {
            node.name = name.clone();
        }
        match &mut node.kind {
            NodeKind::Folder { is_expanded, .. } => {
                if let Some(expanded) = patch.is_expanded {
                    *is_expanded = Some(expanded);
                }
            }
            NodeKind::Embed { embed_src } => {
                if let Some(src) = &patch.embed_src {
                    *embed_src = src.clone();
                }
            }
            NodeKind::File {} => {}
        }
        node
    }

    /// Number of nodes in this subtree, itself included.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children()
            .map(|children| children.iter().map(|c| c.subtree_len()).sum())
            .unwrap_or(0)
    }
}

/// A partial set of field changes for [`crate::tree::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_expanded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_src: Option<String>,
}

impl NodePatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn expanded(expanded: bool) -> Self {
        Self {
            is_expanded: Some(expanded),
            ..Default::default()
        }
    }

    pub fn embed_src(src: impl Into<String>) -> Self {
        Self {
            embed_src: Some(src.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_expanded.is_none() && self.embed_src.is_none()
    }
}

/// The document every new tree starts from: one expanded folder holding a sample embed.
pub fn initial_tree(name: Option<String>) -> Vec<NodeRef> {
    let root = TreeNode {
        id: new_node_id("folder"),
        name: name.unwrap_or_else(|| DEFAULT_TREE_NAME.to_string()),
        kind: NodeKind::Folder {
            is_expanded: Some(true),
            children: Some(vec![TreeNode::default_embed().into_ref()]),
        },
    };
    vec![root.into_ref()]
}

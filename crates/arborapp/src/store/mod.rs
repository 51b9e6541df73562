//! # Storage Layer
//!
//! The tree core performs no I/O. Persistence is a collaborator behind the
//! [`TreeStore`] trait, which deals in whole documents keyed by an opaque
//! [`TreeId`]:
//!
//! - **create**: store a new document, get its id back
//! - **fetch**: read a snapshot by id
//! - **sync**: replace the stored document with a full new snapshot
//!
//! ## Failure Contract
//!
//! `sync_tree` may fail with [`ArborError::SyncFailed`]. Such a failure must
//! leave the previously stored snapshot untouched, so the caller (which still
//! holds the edited tree in memory) can simply retry.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per document, written atomically.
//! - [`memory::InMemoryStore`]: for tests and embedding, with switchable sync
//!   failures.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── arbor.toml            # Configuration (optional)
//! └── tree-{id}.json        # One document per file
//! ```

use crate::error::{ArborError, Result};
use crate::model::NodeRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Opaque document identifier such as `tree-8f3a2c91d0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreeId(String);

impl TreeId {
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        TreeId(format!("tree-{}", &hex[..10]))
    }

    /// Validates a user-supplied id. Ids double as file names, so only ASCII
    /// letters, digits, `-` and `_` are accepted.
    pub fn parse(s: &str) -> Result<Self> {
        let valid = !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ArborError::Api(format!("Invalid tree id: '{}'", s)));
        }
        Ok(TreeId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A listing entry for a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    pub id: TreeId,
    /// Name of the first root node, if any.
    pub name: Option<String>,
    pub node_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl TreeSummary {
    pub(crate) fn describe(id: &TreeId, nodes: &[NodeRef], updated_at: DateTime<Utc>) -> Self {
        Self {
            id: id.clone(),
            name: nodes.first().map(|n| n.name.clone()),
            node_count: nodes.iter().map(|n| n.subtree_len()).sum(),
            updated_at,
        }
    }
}

/// Abstract interface for document persistence.
pub trait TreeStore {
    /// Store a new document and return its fresh id.
    fn create_tree(&mut self, nodes: &[NodeRef]) -> Result<TreeId>;

    /// Read the current snapshot of a document.
    fn fetch_tree(&self, id: &TreeId) -> Result<Vec<NodeRef>>;

    /// Replace a document with a full new snapshot.
    fn sync_tree(&mut self, id: &TreeId, nodes: &[NodeRef]) -> Result<()>;

    /// List stored documents, most recently updated first.
    fn list_trees(&self) -> Result<Vec<TreeSummary>>;
}

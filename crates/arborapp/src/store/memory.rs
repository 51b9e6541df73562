use super::{TreeId, TreeStore, TreeSummary};
use crate::error::{ArborError, Result};
use crate::model::NodeRef;
use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::collections::HashMap;

struct StoredTree {
    nodes: Vec<NodeRef>,
    updated_at: DateTime<Utc>,
}

/// In-memory document store.
///
/// Uses a `Cell` for the failure switch so tests can flip it through a shared
/// reference while the store sits inside an [`crate::api::ArborApi`].
#[derive(Default)]
pub struct InMemoryStore {
    trees: HashMap<TreeId, StoredTree>,
    simulate_sync_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `sync_tree` call fail with a transient error.
    pub fn set_simulate_sync_error(&self, simulate: bool) {
        self.simulate_sync_error.set(simulate);
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl TreeStore for InMemoryStore {
    fn create_tree(&mut self, nodes: &[NodeRef]) -> Result<TreeId> {
        let id = TreeId::generate();
        self.trees.insert(
            id.clone(),
            StoredTree {
                nodes: nodes.to_vec(),
                updated_at: Utc::now(),
            },
        );
        Ok(id)
    }

    fn fetch_tree(&self, id: &TreeId) -> Result<Vec<NodeRef>> {
        self.trees
            .get(id)
            .map(|stored| stored.nodes.clone())
            .ok_or_else(|| ArborError::TreeNotFound(id.to_string()))
    }

    fn sync_tree(&mut self, id: &TreeId, nodes: &[NodeRef]) -> Result<()> {
        if self.simulate_sync_error.get() {
            return Err(ArborError::SyncFailed(format!(
                "{}: simulated network error",
                id
            )));
        }
        let stored = self
            .trees
            .get_mut(id)
            .ok_or_else(|| ArborError::TreeNotFound(id.to_string()))?;
        stored.nodes = nodes.to_vec();
        stored.updated_at = Utc::now();
        Ok(())
    }

    fn list_trees(&self) -> Result<Vec<TreeSummary>> {
        let mut summaries: Vec<TreeSummary> = self
            .trees
            .iter()
            .map(|(id, stored)| TreeSummary::describe(id, &stored.nodes, stored.updated_at))
            .collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        Ok(summaries)
    }
}

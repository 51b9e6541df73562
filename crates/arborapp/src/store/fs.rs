use super::{TreeId, TreeStore, TreeSummary};
use crate::error::{ArborError, Result};
use crate::model::NodeRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// On-disk envelope around a document.
#[derive(Serialize, Deserialize)]
struct TreeFile {
    id: TreeId,
    updated_at: DateTime<Utc>,
    nodes: Vec<NodeRef>,
}

/// File-backed store: one `{id}.json` per document under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tree_path(&self, id: &TreeId) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ArborError::Io)?;
        }
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<TreeFile> {
        let content = fs::read_to_string(path).map_err(ArborError::Io)?;
        serde_json::from_str(&content).map_err(ArborError::Serialization)
    }

    /// Writes through a temp file and a rename so readers never see a partial document.
    fn write_file(&self, id: &TreeId, nodes: &[NodeRef]) -> Result<()> {
        self.ensure_dir()?;
        let file = TreeFile {
            id: id.clone(),
            updated_at: Utc::now(),
            nodes: nodes.to_vec(),
        };
        let content = serde_json::to_string_pretty(&file).map_err(ArborError::Serialization)?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", id, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ArborError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.tree_path(id)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ArborError::Io(e));
        }
        log::debug!("wrote {} ({} root nodes)", id, nodes.len());
        Ok(())
    }
}

impl TreeStore for FileStore {
    fn create_tree(&mut self, nodes: &[NodeRef]) -> Result<TreeId> {
        let mut id = TreeId::generate();
        while self.tree_path(&id).exists() {
            id = TreeId::generate();
        }
        self.write_file(&id, nodes)?;
        Ok(id)
    }

    fn fetch_tree(&self, id: &TreeId) -> Result<Vec<NodeRef>> {
        let path = self.tree_path(id);
        if !path.exists() {
            return Err(ArborError::TreeNotFound(id.to_string()));
        }
        Ok(self.read_file(&path)?.nodes)
    }

    fn sync_tree(&mut self, id: &TreeId, nodes: &[NodeRef]) -> Result<()> {
        if !self.tree_path(id).exists() {
            return Err(ArborError::TreeNotFound(id.to_string()));
        }
        self.write_file(id, nodes).map_err(|e| match e {
            ArborError::Io(io) => ArborError::SyncFailed(format!("{}: {}", id, io)),
            other => other,
        })
    }

    fn list_trees(&self) -> Result<Vec<TreeSummary>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(ArborError::Io)? {
            let path = entry.map_err(ArborError::Io)?.path();
            let is_json = path.extension().is_some_and(|ext| ext == "json");
            let Some(stem) = path.file_stem().and_then(|n| n.to_str()) else {
                continue;
            };
            if !is_json || stem.starts_with('.') {
                continue;
            }
            // The file name is the id; the recorded one is informational.
            let Ok(id) = TreeId::parse(stem) else {
                log::warn!("skipping tree file with invalid name {}", path.display());
                continue;
            };
            match self.read_file(&path) {
                Ok(file) => {
                    if file.id != id {
                        log::warn!(
                            "{} records id {}, listing it as {}",
                            path.display(),
                            file.id,
                            id
                        );
                    }
                    summaries.push(TreeSummary::describe(&id, &file.nodes, file.updated_at));
                }
                Err(e) => log::warn!("skipping unreadable tree file {}: {}", path.display(), e),
            }
        }
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        Ok(summaries)
    }
}

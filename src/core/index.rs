//! Index snapshot data structures and the read-only query boundary.
//!
//! The navigation core consumes a previously built index through the
//! [`IndexSource`] trait: repository enumeration, child enumeration for a
//! hierarchy node, and per-file record lookup. The shipped implementation is
//! [`JsonIndex`], backed by a pretty-printed JSON snapshot on disk.
//!
//! # Public API
//! - [`IndexedRecord`]: Metadata recorded for one file when the index was built
//! - [`RepositoryRecord`]: One indexed repository root
//! - [`IndexSnapshot`]: Complete serialized index state
//! - [`IndexSource`]: Read-only query boundary consumed by the listing provider
//! - [`JsonIndex`]: JSON-snapshot-backed implementation
//!
//! # Snapshot Strategy
//! - **JSON serialization**: Human-readable snapshot files for debugging
//! - **Timestamping**: Track when the snapshot was generated
//! - **Insertion order**: Repository order in the file is the display order

use crate::core::error::{NavigatorError, Result};
use crate::core::node::{HierarchyNode, NodeKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Metadata for a file as last recorded in the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedRecord {
    pub repo_root: PathBuf,
    pub rel_path: PathBuf,
    pub abs_path: PathBuf,
    /// Modification time observed when the index was built
    pub mtime: SystemTime,
    /// File size in bytes, informational only
    pub size: u64,
    /// MD5 hex digest of the file content
    pub hash: String,
}

/// One indexed repository root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub root: PathBuf,
}

/// Complete serialized index state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub repositories: Vec<RepositoryRecord>,
    pub files: Vec<IndexedRecord>,
}

impl IndexSnapshot {
    pub fn new() -> Self {
        Self {
            generated_at: chrono::Utc::now(),
            repositories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Write the snapshot as pretty JSON, creating parent directories first
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| NavigatorError::index_write_failed(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| NavigatorError::index_write_failed(path, e))?;
        log::debug!(
            "Saved index snapshot with {} repositories and {} files to {}",
            self.repositories.len(),
            self.files.len(),
            path.display()
        );
        Ok(())
    }
}

impl Default for IndexSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only query boundary between the navigation core and the backing index
pub trait IndexSource {
    /// Known repositories, in index insertion order
    fn repositories(&self) -> Result<Vec<RepositoryRecord>>;

    /// Immediate children of a repository or directory node, as
    /// `(name, kind)` pairs. File nodes have no children.
    fn children(&self, node: &HierarchyNode) -> Result<Vec<(String, NodeKind)>>;

    /// Indexed record for an absolute file path, if one exists
    fn lookup(&self, abs_path: &Path) -> Result<Option<IndexedRecord>>;
}

/// JSON-snapshot-backed index source
#[derive(Debug)]
pub struct JsonIndex {
    snapshot: IndexSnapshot,
    by_path: HashMap<PathBuf, usize>,
}

impl JsonIndex {
    /// Load a snapshot from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NavigatorError::index_file_not_found(path));
        }
        let content =
            fs::read_to_string(path).map_err(|e| NavigatorError::index_read_failed(path, e))?;
        let snapshot: IndexSnapshot = serde_json::from_str(&content)
            .map_err(|e| NavigatorError::index_parse_failed(path, e))?;
        log::debug!(
            "Loaded index snapshot from {} ({} repositories, {} files)",
            path.display(),
            snapshot.repositories.len(),
            snapshot.files.len()
        );
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_snapshot(snapshot: IndexSnapshot) -> Self {
        let by_path = snapshot
            .files
            .iter()
            .enumerate()
            .map(|(i, f)| (f.abs_path.clone(), i))
            .collect();
        Self { snapshot, by_path }
    }

    pub fn snapshot(&self) -> &IndexSnapshot {
        &self.snapshot
    }

    /// Files recorded under one repository root, in snapshot order
    pub fn files_in_repository(&self, root: &Path) -> Vec<&IndexedRecord> {
        self.snapshot
            .files
            .iter()
            .filter(|f| f.repo_root == root)
            .collect()
    }
}

impl IndexSource for JsonIndex {
    fn repositories(&self) -> Result<Vec<RepositoryRecord>> {
        Ok(self.snapshot.repositories.clone())
    }

    fn children(&self, node: &HierarchyNode) -> Result<Vec<(String, NodeKind)>> {
        if !node.kind.is_container() {
            return Ok(Vec::new());
        }

        // BTreeMap dedupes names across files sharing a directory prefix
        let mut seen: BTreeMap<String, NodeKind> = BTreeMap::new();
        for record in &self.snapshot.files {
            // A nested repository's files carry their own repo_root, so a
            // parent repository never lists into a nested one.
            let in_scope = match node.kind {
                NodeKind::Repository => record.repo_root == node.absolute_path,
                NodeKind::Directory => node.absolute_path.starts_with(&record.repo_root),
                NodeKind::File => false,
            };
            if !in_scope {
                continue;
            }
            let rest = match record.abs_path.strip_prefix(&node.absolute_path) {
                Ok(rest) => rest,
                Err(_) => continue,
            };
            let mut components = rest.components();
            let first = match components.next() {
                Some(c) => c,
                None => continue,
            };
            let name = match first.as_os_str().to_str() {
                Some(s) => s.to_string(),
                None => {
                    log::warn!(
                        "Skipping non-UTF-8 path component under {}",
                        node.absolute_path.display()
                    );
                    continue;
                }
            };
            let kind = if components.next().is_some() {
                NodeKind::Directory
            } else {
                NodeKind::File
            };
            // A directory sighting wins over a file sighting of the same name
            seen.entry(name)
                .and_modify(|k| {
                    if kind == NodeKind::Directory {
                        *k = NodeKind::Directory;
                    }
                })
                .or_insert(kind);
        }

        Ok(seen.into_iter().collect())
    }

    fn lookup(&self, abs_path: &Path) -> Result<Option<IndexedRecord>> {
        Ok(self
            .by_path
            .get(abs_path)
            .map(|&i| self.snapshot.files[i].clone()))
    }
}

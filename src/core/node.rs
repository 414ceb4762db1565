//! Typed hierarchy nodes for the navigable tree.
//!
//! A [`HierarchyNode`] is one addressable point in the repository/directory/file
//! tree exposed to navigation. Parent relationships are intentionally not stored
//! on the node: the navigation session keeps an explicit path stack from root to
//! the active node, so "go to parent" is a stack pop and no ownership cycles can
//! form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Kind of a hierarchy node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// An indexed repository root
    Repository,
    /// A directory inside a repository, known to the index
    Directory,
    /// An indexed file; always a leaf
    File,
}

impl NodeKind {
    /// Whether nodes of this kind can have children
    pub fn is_container(&self) -> bool {
        !matches!(self, NodeKind::File)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Repository => "repository",
            NodeKind::Directory => "directory",
            NodeKind::File => "file",
        };
        write!(f, "{s}")
    }
}

/// One addressable point in the navigable tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub kind: NodeKind,
    /// Human-readable path relative to the parent node. For repository nodes
    /// the parent is the tree root, so this is the full repository root path.
    pub display_path: String,
    /// Resolution target on disk
    pub absolute_path: PathBuf,
}

impl HierarchyNode {
    pub fn repository(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            kind: NodeKind::Repository,
            display_path: root.display().to_string(),
            absolute_path: root,
        }
    }

    pub fn directory(name: impl Into<String>, absolute_path: impl Into<PathBuf>) -> Self {
        Self {
            kind: NodeKind::Directory,
            display_path: name.into(),
            absolute_path: absolute_path.into(),
        }
    }

    pub fn file(name: impl Into<String>, absolute_path: impl Into<PathBuf>) -> Self {
        Self {
            kind: NodeKind::File,
            display_path: name.into(),
            absolute_path: absolute_path.into(),
        }
    }
}

//! Listing construction for the current hierarchy node.
//!
//! [`ListingProvider`] turns a hierarchy node (or the tree root) into the
//! ordered set of navigable children with display metadata and change status.
//! Root listings follow index insertion order; node listings put directories
//! before files, each group sorted ascending by name with a case-sensitive
//! ordinal compare. Display indices are a contiguous 1-based sequence.

use crate::core::change::{ChangeDetector, ChangeStatus};
use crate::core::error::Result;
use crate::core::index::{IndexSource, IndexedRecord};
use crate::core::node::{HierarchyNode, NodeKind};

/// One row of a rendered listing
#[derive(Debug, Clone, PartialEq)]
pub struct ListingEntry {
    /// Stable 1-based display index for the lifetime of one listing
    pub index: usize,
    pub node: HierarchyNode,
    /// Present only for file entries
    pub record: Option<IndexedRecord>,
    pub status: ChangeStatus,
}

/// Builds listings by querying the index and the change detector
pub struct ListingProvider<'a> {
    index: &'a dyn IndexSource,
    detector: ChangeDetector,
}

impl<'a> ListingProvider<'a> {
    pub fn new(index: &'a dyn IndexSource) -> Self {
        Self::with_detector(index, ChangeDetector::new())
    }

    pub fn with_detector(index: &'a dyn IndexSource, detector: ChangeDetector) -> Self {
        Self { index, detector }
    }

    /// Listing for a node, or for the tree root when `node` is `None`.
    ///
    /// Fails only when the backing index cannot be queried; per-file status
    /// problems degrade to `Unknown`, never to an error.
    pub fn list(&mut self, node: Option<&HierarchyNode>) -> Result<Vec<ListingEntry>> {
        match node {
            None => self.list_root(),
            Some(n) => self.list_children(n),
        }
    }

    fn list_root(&mut self) -> Result<Vec<ListingEntry>> {
        let repositories = self.index.repositories()?;
        let entries = repositories
            .into_iter()
            .enumerate()
            .map(|(i, repo)| ListingEntry {
                index: i + 1,
                node: HierarchyNode::repository(repo.root),
                record: None,
                status: ChangeStatus::not_applicable(),
            })
            .collect();
        Ok(entries)
    }

    fn list_children(&mut self, node: &HierarchyNode) -> Result<Vec<ListingEntry>> {
        let mut children = self.index.children(node)?;

        // Directories before files, each group ordered by name (ordinal)
        children.sort_by(|(a_name, a_kind), (b_name, b_kind)| {
            let a_dir = a_kind.is_container();
            let b_dir = b_kind.is_container();
            b_dir.cmp(&a_dir).then_with(|| a_name.cmp(b_name))
        });

        let mut entries = Vec::with_capacity(children.len());
        for (name, kind) in children {
            let absolute_path = node.absolute_path.join(&name);
            let (child, record, status) = match kind {
                NodeKind::File => {
                    let record = self.index.lookup(&absolute_path)?;
                    let status = match &record {
                        Some(r) => self.detector.detect(r),
                        None => ChangeStatus::Unknown("no indexed record".to_string()),
                    };
                    (HierarchyNode::file(name, absolute_path), record, status)
                }
                _ => (
                    HierarchyNode::directory(name, absolute_path),
                    None,
                    ChangeStatus::not_applicable(),
                ),
            };
            entries.push(ListingEntry {
                index: entries.len() + 1,
                node: child,
                record,
                status,
            });
        }

        Ok(entries)
    }
}

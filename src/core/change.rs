//! Change detection between indexed records and the live filesystem.
//!
//! [`ChangeDetector`] classifies a file relative to its [`IndexedRecord`]:
//! missing from disk, unchanged, modified, or unknown when status cannot be
//! determined. The modification-time comparison is the fast path; content is
//! only hashed when mtimes differ, so a `touch` without an edit still reports
//! `Unchanged`.
//!
//! # Public API
//! - [`ChangeStatus`]: Classification of a file's live state
//! - [`ChangeDetector`]: Stateful detector with a per-(path, mtime) hash cache
//! - [`ContentHasher`]: Hashing seam, defaulting to [`Md5Hasher`]
//!
//! Any I/O failure during detection yields `Unknown(reason)` instead of an
//! error: a listing must always render, whatever the disk is doing.

use crate::core::index::IndexedRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Classification of a file's live state relative to its indexed record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeStatus {
    /// Live content matches the indexed record
    Unchanged,
    /// Live content differs from the indexed record
    Modified,
    /// No filesystem entry exists at the recorded path
    Missing,
    /// Status could not be determined; the reason is rendered, never fatal
    Unknown(String),
}

impl ChangeStatus {
    /// Status for entries that are not files (directories, repositories)
    pub fn not_applicable() -> Self {
        ChangeStatus::Unknown("not applicable".to_string())
    }

    /// One-character symbol for listing display
    pub fn symbol(&self) -> &'static str {
        match self {
            ChangeStatus::Unchanged => "=",
            ChangeStatus::Modified => "M",
            ChangeStatus::Missing => "!",
            ChangeStatus::Unknown(_) => "?",
        }
    }

    /// Human-readable description for report output
    pub fn description(&self) -> &'static str {
        match self {
            ChangeStatus::Unchanged => "unchanged",
            ChangeStatus::Modified => "modified",
            ChangeStatus::Missing => "missing",
            ChangeStatus::Unknown(_) => "unknown",
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, ChangeStatus::Modified | ChangeStatus::Missing)
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content hashing seam so the mtime fast path is provable in tests
pub trait ContentHasher {
    fn hash_file(&self, path: &Path) -> io::Result<String>;
}

/// MD5 hex digest over the raw file bytes
pub struct Md5Hasher;

impl ContentHasher for Md5Hasher {
    fn hash_file(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(format!("{:x}", md5::compute(&bytes)))
    }
}

/// Convenience for indexing: hash a file with the default hasher
pub fn hash_file(path: &Path) -> io::Result<String> {
    Md5Hasher.hash_file(path)
}

/// Stateful change detector with a hash cache for the lifetime of one listing
pub struct ChangeDetector {
    hasher: Box<dyn ContentHasher>,
    // Keyed by path; the stored mtime invalidates the entry when it moves
    cache: HashMap<PathBuf, (SystemTime, String)>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::with_hasher(Box::new(Md5Hasher))
    }

    pub fn with_hasher(hasher: Box<dyn ContentHasher>) -> Self {
        Self {
            hasher,
            cache: HashMap::new(),
        }
    }

    /// Classify a file relative to its indexed record.
    ///
    /// Equal modification times short-circuit without reading content.
    pub fn detect(&mut self, record: &IndexedRecord) -> ChangeStatus {
        let metadata = match fs::metadata(&record.abs_path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return ChangeStatus::Missing,
            Err(e) => return ChangeStatus::Unknown(e.to_string()),
        };

        let live_mtime = match metadata.modified() {
            Ok(t) => t,
            Err(e) => return ChangeStatus::Unknown(e.to_string()),
        };

        if live_mtime == record.mtime {
            return ChangeStatus::Unchanged;
        }

        match self.hash_at(&record.abs_path, live_mtime) {
            Ok(live_hash) if live_hash == record.hash => ChangeStatus::Unchanged,
            Ok(_) => ChangeStatus::Modified,
            Err(e) => ChangeStatus::Unknown(e.to_string()),
        }
    }

    fn hash_at(&mut self, path: &Path, live_mtime: SystemTime) -> io::Result<String> {
        if let Some((cached_mtime, cached_hash)) = self.cache.get(path) {
            if *cached_mtime == live_mtime {
                return Ok(cached_hash.clone());
            }
        }
        let hash = self.hasher.hash_file(path)?;
        self.cache
            .insert(path.to_path_buf(), (live_mtime, hash.clone()));
        Ok(hash)
    }
}

impl Default for ChangeDetector {
    fn default() -> Self {
        Self::new()
    }
}

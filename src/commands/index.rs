//! Index building: discover repositories and record file state.
//!
//! Walks a root directory for git repositories, enumerates each repository's
//! tracked files through git2, and records modification time, size, and MD5
//! content hash per file into a JSON snapshot. Unreadable files are skipped
//! with a warning; the snapshot always gets written.

use crate::commands::resolve_index_path;
use crate::core::change;
use crate::core::error::Result;
use crate::core::index::{IndexSnapshot, IndexedRecord, RepositoryRecord};
use crate::core::output::print_success;
use std::fs;
use std::path::{Path, PathBuf};

pub fn execute_index(root: PathBuf, db: Option<PathBuf>) -> Result<()> {
    let root = fs::canonicalize(&root)?;
    log::info!("Scanning {} for git repositories", root.display());

    let repo_roots = find_git_repos(&root)?;
    let mut snapshot = IndexSnapshot::new();

    for repo_root in &repo_roots {
        snapshot.repositories.push(RepositoryRecord {
            root: repo_root.clone(),
        });

        let tracked = match tracked_files(repo_root) {
            Ok(files) => files,
            Err(e) => {
                log::warn!(
                    "Skipping repository {}: could not read tracked files: {e}",
                    repo_root.display()
                );
                continue;
            }
        };

        for (rel_path, abs_path) in tracked {
            match record_file(repo_root, rel_path, abs_path) {
                Some(record) => snapshot.files.push(record),
                None => continue,
            }
        }
    }

    let index_path = resolve_index_path(db)?;
    snapshot.save(&index_path)?;

    print_success(&format!(
        "Indexed {} files across {} repositories into {}",
        snapshot.files.len(),
        snapshot.repositories.len(),
        index_path.display()
    ));

    Ok(())
}

/// Recursively discover git repository roots under a starting directory.
///
/// A directory containing `.git` (directory or pointer file) is a root; the
/// walk does not descend into discovered repositories. Subdirectories are
/// visited in name order so the index insertion order is stable from run to
/// run.
pub fn find_git_repos(start: &Path) -> Result<Vec<PathBuf>> {
    let mut repos = Vec::new();
    visit_directory(start, &mut repos);
    Ok(repos)
}

fn visit_directory(dir: &Path, repos: &mut Vec<PathBuf>) {
    if dir.join(".git").exists() {
        repos.push(dir.to_path_buf());
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Skipping unreadable directory {}: {e}", dir.display());
            return;
        }
    };

    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        // Symlinked directories are skipped to keep the walk cycle-free
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => subdirs.push(entry.path()),
            _ => {}
        }
    }
    subdirs.sort();

    for subdir in subdirs {
        visit_directory(&subdir, repos);
    }
}

/// Tracked files in a repository as `(relative, absolute)` path pairs
fn tracked_files(repo_root: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    let repo = git2::Repository::open(repo_root)?;
    let index = repo.index()?;

    let mut files = Vec::new();
    for entry in index.iter() {
        match String::from_utf8(entry.path) {
            Ok(rel) => {
                let rel_path = PathBuf::from(rel);
                let abs_path = repo_root.join(&rel_path);
                files.push((rel_path, abs_path));
            }
            Err(_) => {
                log::warn!(
                    "Skipping non-UTF-8 tracked path in {}",
                    repo_root.display()
                );
            }
        }
    }
    Ok(files)
}

fn record_file(repo_root: &Path, rel_path: PathBuf, abs_path: PathBuf) -> Option<IndexedRecord> {
    let metadata = match fs::metadata(&abs_path) {
        Ok(m) => m,
        Err(e) => {
            log::warn!("Skipping {}: {e}", abs_path.display());
            return None;
        }
    };
    if !metadata.is_file() {
        return None;
    }
    let mtime = match metadata.modified() {
        Ok(t) => t,
        Err(e) => {
            log::warn!("Skipping {}: no modification time: {e}", abs_path.display());
            return None;
        }
    };
    let hash = match change::hash_file(&abs_path) {
        Ok(h) => h,
        Err(e) => {
            log::warn!("Skipping {}: could not hash: {e}", abs_path.display());
            return None;
        }
    };

    Some(IndexedRecord {
        repo_root: repo_root.to_path_buf(),
        rel_path,
        abs_path,
        mtime,
        size: metadata.len(),
        hash,
    })
}

//! Test data generation utilities and predefined scenarios
//!
//! Provides workspace layouts with specific repository and file states to
//! test indexing and navigation consistently.

#![allow(dead_code)]

use super::repository::*;
use index_navigator::core::error::Result;
use std::path::PathBuf;

/// Scenario: two repositories, one with a nested src/ directory
///
/// Layout:
/// - repoA/README.md
/// - repoA/src/main.rs
/// - repoA/src/lib.rs
/// - repoB/notes.txt
pub fn create_two_repo_workspace() -> Result<(TestWorkspace, PathBuf, PathBuf)> {
    let workspace = setup_workspace()?;

    let repo_a = setup_repo(&workspace, "repoA")?;
    create_file(&repo_a, "README.md", "# repoA\n")?;
    create_file(&repo_a, "src/main.rs", "fn main() {}\n")?;
    create_file(&repo_a, "src/lib.rs", "pub fn lib() {}\n")?;
    git_add(&repo_a, ".")?;
    git_commit(&repo_a, "Initial commit")?;

    let repo_b = setup_repo(&workspace, "repoB")?;
    commit_file(&repo_b, "notes.txt", "notes\n")?;

    Ok((workspace, repo_a, repo_b))
}

/// Scenario: one repository with several committed files for change testing
pub fn create_single_repo_workspace() -> Result<(TestWorkspace, PathBuf)> {
    let workspace = setup_workspace()?;

    let repo = setup_repo(&workspace, "solo")?;
    create_file(&repo, "keep.txt", "stable content\n")?;
    create_file(&repo, "edit.txt", "original content\n")?;
    create_file(&repo, "gone.txt", "doomed content\n")?;
    git_add(&repo, ".")?;
    git_commit(&repo, "Initial commit")?;

    Ok((workspace, repo))
}

//! Workspace and repository setup utilities
//!
//! Provides functions for creating temporary workspaces holding one or more
//! real git repositories with committed files, plus an index snapshot built
//! over them.

#![allow(dead_code)]

use index_navigator::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test workspace result containing both the temporary directory and the
/// workspace path. The TempDir must be kept alive for the duration of the
/// test to prevent cleanup.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Get the workspace path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default index snapshot location inside the workspace
    pub fn db_path(&self) -> PathBuf {
        self.path.join("index.json")
    }
}

/// Sets up an empty temporary workspace for test repositories
pub fn setup_workspace() -> Result<TestWorkspace> {
    let temp_dir = TempDir::new()?;
    // Canonicalize so indexed paths match what the commands record
    let path = fs::canonicalize(temp_dir.path())?;
    Ok(TestWorkspace { temp_dir, path })
}

/// Initializes a git repository under the workspace
///
/// Creates the directory, runs `git init`, and sets up basic git
/// configuration to avoid user prompts.
pub fn setup_repo(workspace: &TestWorkspace, name: &str) -> Result<PathBuf> {
    let repo_path = workspace.path.join(name);
    fs::create_dir_all(&repo_path)?;

    std::process::Command::new("git")
        .args(["init"])
        .current_dir(&repo_path)
        .output()?;

    std::process::Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(&repo_path)
        .output()?;

    std::process::Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(&repo_path)
        .output()?;

    Ok(repo_path)
}

/// Creates a file with specified content, creating parent directories
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Adds a file to the git index
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    std::process::Command::new("git")
        .args(["add", filename])
        .current_dir(repo_path)
        .output()?;
    Ok(())
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    std::process::Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(repo_path)
        .output()?;
    Ok(())
}

/// Creates, stages, and commits a file in one step
pub fn commit_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    create_file(repo_path, filename, content)?;
    git_add(repo_path, filename)?;
    git_commit(repo_path, &format!("Add {filename}"))?;
    Ok(())
}

/// Removes a file from the filesystem (not from git)
pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename))?;
    Ok(())
}

/// Builds an index snapshot over the workspace into its default db path
pub fn build_index(workspace: &TestWorkspace) -> Result<PathBuf> {
    let db = workspace.db_path();
    index_navigator::commands::execute_index(workspace.path.clone(), Some(db.clone()))?;
    Ok(db)
}

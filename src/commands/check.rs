//! Change report: compare indexed records against the live filesystem.
//!
//! Without an argument every repository in the index is checked; with one, the
//! argument selects a single repository by 1-based position, full root path,
//! or trailing path component.

use crate::commands::resolve_index_path;
use crate::core::change::{ChangeDetector, ChangeStatus};
use crate::core::colors::{get_status_color_style, get_status_symbol};
use crate::core::error::{NavigatorError, Result};
use crate::core::index::{JsonIndex, RepositoryRecord};
use crate::core::output::{print_info, print_section_header};
use colored::*;
use std::path::{Path, PathBuf};

pub fn execute_check(repo: Option<String>, db: Option<PathBuf>) -> Result<()> {
    let index_path = resolve_index_path(db)?;
    let index = JsonIndex::load(&index_path)?;

    let all = index.snapshot().repositories.clone();
    if all.is_empty() {
        return Err(NavigatorError::NoRepositories);
    }

    let selected = match repo {
        Some(input) => vec![select_repository(&all, &input)?],
        None => all,
    };

    let mut detector = ChangeDetector::new();
    let mut total_changed = 0;

    for repo in &selected {
        total_changed += check_repository(&index, &mut detector, &repo.root);
    }

    if total_changed == 0 {
        print_info("All files match the index.");
    }

    Ok(())
}

/// Resolve a repository argument against the index.
///
/// An all-digit argument is a 1-based position into the repository listing;
/// anything else must equal a repository root or its trailing component.
fn select_repository(repos: &[RepositoryRecord], input: &str) -> Result<RepositoryRecord> {
    let trimmed = input.trim();

    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let position: usize = trimmed
            .parse()
            .map_err(|_| NavigatorError::out_of_range(0, repos.len()))?;
        if position == 0 || position > repos.len() {
            return Err(NavigatorError::out_of_range(position, repos.len()));
        }
        return Ok(repos[position - 1].clone());
    }

    repos
        .iter()
        .find(|r| r.root == Path::new(trimmed) || r.root.ends_with(trimmed))
        .cloned()
        .ok_or_else(|| NavigatorError::repository_not_found(trimmed))
}

/// Print non-unchanged files for one repository; returns the changed count
fn check_repository(index: &JsonIndex, detector: &mut ChangeDetector, root: &Path) -> usize {
    let records = index.files_in_repository(root);

    print_section_header(&root.display().to_string());

    let mut modified = 0;
    let mut missing = 0;
    let mut unknown = 0;
    for record in &records {
        let status = detector.detect(record);
        match status {
            ChangeStatus::Unchanged => continue,
            ChangeStatus::Modified => modified += 1,
            ChangeStatus::Missing => missing += 1,
            ChangeStatus::Unknown(_) => unknown += 1,
        }
        let color_fn = get_status_color_style(&status);
        println!(
            "  {} {} {}",
            get_status_symbol(&status),
            color_fn(&record.rel_path.display().to_string()),
            format!("({})", status.description()).bright_black()
        );
    }

    println!(
        "  {}",
        format!(
            "{} files: {modified} modified, {missing} missing, {unknown} unknown",
            records.len()
        )
        .bright_black()
    );

    modified + missing + unknown
}

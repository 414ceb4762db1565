//! Repository listing from a previously built index snapshot.

use crate::commands::resolve_index_path;
use crate::core::error::{NavigatorError, Result};
use crate::core::index::JsonIndex;
use crate::core::output::print_section_header;
use colored::*;
use std::path::PathBuf;

pub fn execute_repos(db: Option<PathBuf>) -> Result<()> {
    let index_path = resolve_index_path(db)?;
    let index = JsonIndex::load(&index_path)?;
    let snapshot = index.snapshot();

    if snapshot.repositories.is_empty() {
        return Err(NavigatorError::NoRepositories);
    }

    print_section_header(&format!(
        "Indexed repositories (snapshot from {})",
        snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for (position, repo) in snapshot.repositories.iter().enumerate() {
        let file_count = index.files_in_repository(&repo.root).len();
        println!(
            "  {} {} {}",
            format!("[{}]", position + 1).cyan().bold(),
            repo.root.display().to_string().cyan(),
            format!("({file_count} files)").bright_black()
        );
    }
    println!();

    Ok(())
}

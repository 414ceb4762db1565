//! Command implementations for the index-navigator CLI.

pub mod browse;
pub mod check;
pub mod index;
pub mod repos;

pub use browse::execute_browse;
pub use check::execute_check;
pub use index::execute_index;
pub use repos::execute_repos;

use crate::core::config::NavigatorConfig;
use crate::core::dirs::get_data_directory;
use crate::core::error::Result;
use std::path::PathBuf;

/// Index snapshot location: `--db` flag, then config override, then the
/// default data directory.
pub fn resolve_index_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }
    if let Ok(config) = NavigatorConfig::load_or_create() {
        if let Some(path) = config.index_file {
            return Ok(path);
        }
    }
    Ok(get_data_directory()?.join("index.json"))
}

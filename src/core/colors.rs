//! Unified color system for change-status visualization.
//!
//! Centralized color mapping so every listing and report renders a given
//! status the same way.
//!
//! # Color Scheme
//! - **Unchanged**: bright black (quiet, matches the index)
//! - **Modified**: yellow
//! - **Missing**: red
//! - **Unknown**: magenta (status could not be determined)
//! - **Directories**: blue with a `/` suffix, **repositories**: cyan

use crate::core::change::ChangeStatus;
use crate::core::listing::ListingEntry;
use crate::core::node::NodeKind;
use colored::*;

/// Color styling closure for a change status
pub fn get_status_color_style(status: &ChangeStatus) -> Box<dyn Fn(&str) -> ColoredString> {
    match status {
        ChangeStatus::Unchanged => Box::new(|text: &str| text.bright_black()),
        ChangeStatus::Modified => Box::new(|text: &str| text.yellow()),
        ChangeStatus::Missing => Box::new(|text: &str| text.red()),
        ChangeStatus::Unknown(_) => Box::new(|text: &str| text.magenta()),
    }
}

/// Colored one-character status symbol
pub fn get_status_symbol(status: &ChangeStatus) -> ColoredString {
    let color_fn = get_status_color_style(status);
    color_fn(status.symbol())
}

/// Entry name colored by kind (containers) or status (files)
pub fn get_colored_name(entry: &ListingEntry) -> ColoredString {
    match entry.node.kind {
        NodeKind::Repository => entry.node.display_path.cyan(),
        NodeKind::Directory => format!("{}/", entry.node.display_path).blue(),
        NodeKind::File => {
            let color_fn = get_status_color_style(&entry.status);
            color_fn(&entry.node.display_path)
        }
    }
}

/// Complete listing line: `> [n] M name` with cursor marker and colors
pub fn format_listing_entry(entry: &ListingEntry, selected: bool) -> String {
    let marker = if selected { ">".white().bold() } else { " ".normal() };
    let index_colored = format!("[{}]", entry.index).cyan().bold();
    let status_colored = match entry.node.kind {
        NodeKind::File => get_status_symbol(&entry.status),
        _ => " ".normal(),
    };
    let name_colored = get_colored_name(entry);
    format!("{marker} {index_colored} {status_colored} {name_colored}")
}

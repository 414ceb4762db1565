//! Core functionality for the index-navigator tool.
//!
//! This module provides the fundamental building blocks for navigating an
//! index of repositories: hierarchy nodes, change detection, listing
//! construction, input resolution, the navigation state machine, and the
//! external editor boundary.

pub mod change;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod index;
pub mod launcher;
pub mod listing;
pub mod node;
pub mod output;
pub mod resolver;
pub mod session;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{NavigatorError, Result};

// === Hierarchy nodes ===
// Typed tree nodes for repositories, directories, and files
pub use node::{HierarchyNode, NodeKind};

// === Index boundary ===
// Read-only query trait plus the JSON snapshot implementation
pub use index::{IndexSnapshot, IndexSource, IndexedRecord, JsonIndex, RepositoryRecord};

// === Change detection ===
// Classification of live files against their indexed records
pub use change::{ChangeDetector, ChangeStatus, ContentHasher, Md5Hasher};

// === Listings ===
// Ordered, numbered children of the current node with status annotations
pub use listing::{ListingEntry, ListingProvider};

// === Input resolution ===
// Jump tokens resolved as index, name, or filesystem path
pub use resolver::{resolve, ResolvedTarget};

// === Navigation state machine ===
// Session state, command set, and lifecycle modes
pub use session::{NavCommand, NavSession, SessionMode};

// === External editor boundary ===
// Fire-and-forget launcher implementations
pub use launcher::{launcher_from_config, CommandLauncher, EditorLauncher, NoopLauncher};

// === Configuration ===
pub use config::NavigatorConfig;

// === Color system ===
// Unified change-status coloring for listings and reports
pub use colors::{format_listing_entry, get_colored_name, get_status_color_style, get_status_symbol};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_section_header, print_status, print_success};

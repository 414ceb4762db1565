//! Index Navigator - A lightweight Rust CLI tool for walking indexed repositories
//! and comparing files against their recorded state.
//!
//! This library provides the core functionality for index-navigator: index
//! snapshots, change detection, listing construction, jump resolution, the
//! navigation state machine, and the external editor boundary.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Index snapshot loading and queries
//! - Change detection between indexed records and the live filesystem
//! - The navigation session and its command set
//! - Error handling and result types
//! - Color and output formatting helpers

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    format_listing_entry,
    get_colored_name,
    // Color system (core functions)
    get_status_color_style,
    get_status_symbol,

    launcher_from_config,

    print_error,
    print_info,
    print_section_header,
    print_status,
    print_success,

    // Change detection
    ChangeDetector,
    ChangeStatus,
    CommandLauncher,
    ContentHasher,

    // External editor boundary
    EditorLauncher,
    // Hierarchy nodes
    HierarchyNode,
    // Index boundary
    IndexSnapshot,
    IndexSource,
    IndexedRecord,
    JsonIndex,

    // Listings
    ListingEntry,
    ListingProvider,
    Md5Hasher,

    // Navigation state machine
    NavCommand,
    NavSession,
    // Error handling
    NavigatorConfig,
    NavigatorError,
    NodeKind,
    NoopLauncher,
    RepositoryRecord,
    Result,
    SessionMode,
};

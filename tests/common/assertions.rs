//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating index-navigator command output and
//! expected error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for a missing-index error message
pub fn index_missing() -> impl Predicate<str> {
    predicates::str::contains("Index file does not exist")
}

/// Creates a predicate that checks for the empty-index error message
pub fn no_repositories() -> impl Predicate<str> {
    predicates::str::contains("No repositories in the index")
}

/// Creates a predicate that checks for numbered listing indices
pub fn has_entry_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}

/// Creates a predicate that checks for change status descriptions
pub fn has_status(status: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("({})", status))
}

/// Creates a predicate that checks for the root breadcrumb header
pub fn at_root() -> impl Predicate<str> {
    predicates::str::contains("(root)")
}

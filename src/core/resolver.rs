//! Free-text jump resolution against the current listing.
//!
//! User input at the jump prompt can be a 1-based display index, an entry
//! name, or a quoted or unquoted filesystem path. [`resolve`] applies the
//! rules in a fixed order and returns an explicit [`ResolvedTarget`] variant,
//! keeping the parsing total and testable in isolation from the session.
//!
//! # Resolution Rules (tried in order)
//! 1. Purely numeric input is a 1-based index into the listing
//! 2. Quoted input (`"…"` or `'…'`) is matched verbatim, preserving internal
//!    whitespace; quotes suppress the numeric rule entirely
//! 3. Anything else matches case-sensitively against entry display paths,
//!    falling back to an on-disk path probe when no entry matches
//!
//! Quoted input that collides with a display name resolves to the listing
//! entry: names are matched before the path probe, and the literal branch is
//! never re-trimmed or reinterpreted as a number.

use crate::core::error::{NavigatorError, Result};
use crate::core::listing::ListingEntry;
use std::fs;
use std::path::{Path, PathBuf};

/// How a jump token resolved, as an explicit tagged variant
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedTarget {
    /// 0-based offset into the current listing, from a numeric token
    ByIndex(usize),
    /// 0-based offset into the current listing, from a display-path match
    ByName(usize),
    /// An on-disk path outside the current listing
    ByPath(PathBuf),
}

/// Resolve a raw jump token against the current listing.
///
/// Pure apart from the existence probe in the path fallback: the same input
/// and listing always produce the same result.
pub fn resolve(raw_input: &str, listing: &[ListingEntry]) -> Result<ResolvedTarget> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Err(NavigatorError::EmptyInput);
    }

    // Rule 1: purely numeric input is a 1-based display index
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        let index: usize = trimmed
            .parse()
            .map_err(|_| NavigatorError::out_of_range(0, listing.len()))?;
        if index == 0 || index > listing.len() {
            return Err(NavigatorError::out_of_range(index, listing.len()));
        }
        return Ok(ResolvedTarget::ByIndex(index - 1));
    }

    // Rule 2: quoted input is matched verbatim, whitespace preserved
    if let Some(interior) = strip_matching_quotes(trimmed) {
        return match_name_or_path(interior, listing);
    }

    // Rule 3: trimmed input as a name, then as a filesystem path
    match_name_or_path(trimmed, listing)
}

/// Strip one pair of matching quote characters, if present
fn strip_matching_quotes(input: &str) -> Option<&str> {
    let bytes = input.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return Some(&input[1..input.len() - 1]);
        }
    }
    None
}

fn match_name_or_path(token: &str, listing: &[ListingEntry]) -> Result<ResolvedTarget> {
    let matches: Vec<usize> = listing
        .iter()
        .enumerate()
        .filter(|(_, e)| e.node.display_path == token)
        .map(|(i, _)| i)
        .collect();

    match matches.len() {
        1 => Ok(ResolvedTarget::ByName(matches[0])),
        0 => resolve_as_path(token),
        _ => Err(NavigatorError::ambiguous(
            token,
            matches
                .iter()
                .map(|&i| listing[i].node.display_path.clone())
                .collect(),
        )),
    }
}

fn resolve_as_path(token: &str) -> Result<ResolvedTarget> {
    let path = Path::new(token);
    if !path.exists() {
        return Err(NavigatorError::not_found(token));
    }
    // Absolutize relative input; fall back to the typed form on failure
    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    Ok(ResolvedTarget::ByPath(absolute))
}

//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Standardized formatting for all index-navigator output: red for errors,
//! white for messages, blue for section headers, with spacing newlines around
//! command output.

use colored::*;

/// Formats and prints an error message with consistent styling
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a transient session status line (non-fatal problems)
pub fn print_status(message: &str) {
    println!("{} {}", "•".yellow(), message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

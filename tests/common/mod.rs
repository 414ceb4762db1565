//! Consolidated test utilities for index-navigator
//!
//! This module provides unified testing utilities for integration tests,
//! focused on real git repository workspaces for reliable testing.

pub mod assertions;
pub mod fixtures;
pub mod repository;

//! Shared test utilities for screener integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated test execution with temp directories
//! - Builders for DOCX and PDF resumes

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;

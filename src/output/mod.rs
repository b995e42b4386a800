//! Output formatting
//!
//! This module provides:
//! - The markdown section written into the changelog
//! - A terminal summary of the run

mod markdown;
mod summary;

pub use markdown::MarkdownFormatter;
pub use summary::write_summary;

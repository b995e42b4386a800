//! depchangelog - Changelog generator for pinned dependencies
//!
//! This library provides the pipeline behind the CLI:
//! - Resolving revision labels to commit ids
//! - Loading composer.lock snapshots from git or the working tree
//! - Diffing snapshots into per-dependency change records
//! - Collecting each dependency's commit log from its local checkout
//! - Rendering a markdown section and inserting it into the changelog

pub mod changelog;
pub mod cli;
pub mod config;
pub mod diff;
pub mod domain;
pub mod error;
pub mod git;
pub mod history;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod resolver;

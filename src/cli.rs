//! CLI argument parsing module for depchangelog

use clap::Parser;
use std::path::PathBuf;

/// Changelog generator for pinned dependencies
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depchangelog",
    version,
    about = "Adds the commit logs of changed lockfile dependencies to CHANGELOG.md"
)]
pub struct CliArgs {
    /// Branch, tag or commit id from which the changelog should be generated
    #[arg(value_name = "OLD")]
    pub old: String,

    /// Branch, tag or commit id up to which the changelog is generated
    /// (default: the working tree, labelled with the current branch)
    #[arg(value_name = "NEW")]
    pub new: Option<String>,

    /// Project repository root
    #[arg(short = 'C', long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (default: <root>/changelog.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the section instead of inserting it into the changelog
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - warnings only, no progress
    #[arg(short, long)]
    pub quiet: bool,
}

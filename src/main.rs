//! depchangelog - Changelog generator for pinned dependencies
//!
//! Compares the lockfile at two revisions and adds the commit logs of every
//! changed dependency to the project's changelog.

use clap::Parser;
use depchangelog::cli::CliArgs;
use depchangelog::config::Config;
use depchangelog::git::SystemGit;
use depchangelog::logging;
use depchangelog::orchestrator::Orchestrator;
use depchangelog::output::write_summary;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(logging::default_level(args.verbose, args.quiet));

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_dir(&args.root)?,
    };

    let orchestrator = Orchestrator::new(config, &args.root, SystemGit::new())
        .with_dry_run(args.dry_run)
        .with_progress(!args.quiet);
    let result = orchestrator.run(&args.old, args.new.as_deref())?;

    let mut stdout = io::stdout().lock();
    if args.dry_run {
        stdout.write_all(result.section.as_bytes())?;
    } else if !args.quiet {
        write_summary(&result, &mut stdout)?;
    }
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}

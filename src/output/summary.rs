//! Terminal summary of a changelog run

use crate::orchestrator::OrchestratorResult;
use colored::Colorize;
use std::io::Write;

/// Write a short human-readable summary of the run
pub fn write_summary(result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
    let headline = format!(
        "{} ({} dependencies, {} commits)",
        result.version,
        result.reported_dependencies(),
        result.total_commits()
    );

    match &result.changelog {
        Some(path) => writeln!(
            writer,
            "{} Added {} to {}",
            "✓".green(),
            headline.bold(),
            path.display()
        )?,
        None => writeln!(writer, "{} Would add {}", "•".cyan(), headline.bold())?,
    }

    for change in result.changes.iter().filter(|c| c.has_commits()) {
        writeln!(
            writer,
            "  {} {}",
            change.record.dependency_name,
            format!("+{}", change.commits.len()).green()
        )?;
    }

    if !result.diagnostics.is_empty() {
        writeln!(
            writer,
            "{}",
            format!("{} warning(s), see log output", result.diagnostics.len()).yellow()
        )?;
    }

    Ok(())
}

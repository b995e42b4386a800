//! Diagnostic logging setup
//!
//! Log lines go to stderr so stdout stays clean for the generated section.

use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Default log level for a verbosity choice
pub fn default_level(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the default level
pub fn init(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false, false), Level::INFO);
        assert_eq!(default_level(true, false), Level::DEBUG);
        assert_eq!(default_level(false, true), Level::WARN);
        assert_eq!(default_level(true, true), Level::WARN);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(Level::INFO);
        init(Level::DEBUG);
    }
}

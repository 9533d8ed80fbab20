//! Tracing subscriber setup for the binary.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed.  `RUST_LOG` replaces the flag-derived filter when set.

use std::io::IsTerminal as _;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events pass the flag-derived filter.
const LOG_TARGETS: &[&str] = &["sprig", "sprig_core", "sprig_adapters"];

/// What `-v`/`-q`/`--no-color` ask of the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogSettings {
    level: Level,
    ansi: bool,
}

impl LogSettings {
    fn from_args(args: &GlobalArgs, stderr_is_terminal: bool) -> Self {
        let level = match (args.quiet, args.verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => Level::WARN,
            (false, 1) => Level::INFO,
            (false, 2) => Level::DEBUG,
            (false, _) => Level::TRACE,
        };
        Self {
            level,
            ansi: stderr_is_terminal && !args.no_color,
        }
    }

    fn directives(&self) -> String {
        let level = self.level.as_str().to_ascii_lowercase();
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber; call once, before anything logs.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let settings = LogSettings::from_args(args, std::io::stderr().is_terminal());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.directives()));

    let stderr_layer = fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(settings.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(verbose: u8, quiet: bool) -> LogSettings {
        let args = GlobalArgs {
            verbose,
            quiet,
            ..GlobalArgs::default()
        };
        LogSettings::from_args(&args, true)
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let levels: Vec<_> = (0..=4).map(|v| settings(v, false).level).collect();
        assert_eq!(
            levels,
            [Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE, Level::TRACE]
        );
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(settings(0, true).level, Level::ERROR);
        assert_eq!(settings(3, true).level, Level::ERROR);
    }

    #[test]
    fn ansi_needs_terminal_and_color() {
        assert!(settings(0, false).ansi);

        let no_color = GlobalArgs {
            no_color: true,
            ..GlobalArgs::default()
        };
        assert!(!LogSettings::from_args(&no_color, true).ansi);
        assert!(!LogSettings::from_args(&GlobalArgs::default(), false).ansi);
    }

    #[test]
    fn directives_cover_every_crate() {
        let directives = settings(2, false).directives();
        assert_eq!(
            directives,
            "sprig=debug,sprig_core=debug,sprig_adapters=debug"
        );
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}

//! Error handling for the Sprig CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use sprig_core::error::{ErrorCategory as CoreCategory, SprigError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Exit code for every failed run.  Argument errors exit earlier with 2.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from the scaffold pipeline.
    #[error(transparent)]
    Core(#[from] SprigError),

    /// An I/O operation outside the pipeline failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                "Check the file passed to --config, or the default config file".into(),
                "Environment variables override the file: SPRIG_<SECTION>__<KEY>".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Permission => ErrorCategory::UserError,
                CoreCategory::Installation => ErrorCategory::External,
                CoreCategory::Filesystem => ErrorCategory::Filesystem,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Filesystem,
        }
    }

    /// Exit code to pass to the OS.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// Report with ANSI colours: message, causes when `verbose`, suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same report as [`Self::format_colored`] without escape codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| -> String {
            if !color {
                return text.to_owned();
            }
            match style {
                Style::Error => text.red().bold().to_string(),
                Style::Heading => text.yellow().bold().to_string(),
                Style::Faint => text.dimmed().to_string(),
            }
        };
        let mut lines = Vec::new();

        let heading = if color { "\u{2717} Error:" } else { "Error:" };
        lines.push(String::new());
        lines.push(paint(heading, Style::Error));
        lines.push(format!("  {self}"));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                lines.push(paint(&format!("  Caused by: {err}"), Style::Faint));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint("Suggestions:", Style::Heading));
            lines.extend(suggestions.iter().map(|s| format!("  {s}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint("Use -v / --verbose for more details.", Style::Faint));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Log the error using tracing.
    ///
    /// The rendered report already carries the message, so only internal
    /// errors are logged above DEBUG.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::debug!("User error: {}", self),
            ErrorCategory::External => tracing::debug!("Package manager error: {}", self),
            ErrorCategory::Configuration => tracing::debug!("Configuration error: {}", self),
            ErrorCategory::Filesystem => tracing::debug!("Filesystem error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Error,
    Heading,
    Faint,
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad project name or unusable destination.
    UserError,
    /// The package manager failed or is missing.
    External,
    /// Configuration error.
    Configuration,
    /// A template or project file could not be read or written.
    Filesystem,
    /// Internal/system error.
    Internal,
}

/// Extension trait to convert I/O errors into [`CliError`] at call-sites
/// with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use sprig_core::{application::ApplicationError, domain::DomainError};

    fn invalid_name() -> CliError {
        CliError::Core(
            DomainError::InvalidProjectName {
                name: "NODE_MODULES".into(),
                problems: vec![
                    "node_modules is a blacklisted name".into(),
                    "name can no longer contain capital letters".into(),
                ],
            }
            .into(),
        )
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn invalid_name_lists_every_problem_in_order() {
        let suggestions = invalid_name().suggestions();
        assert_eq!(suggestions[0], "  * node_modules is a blacklisted name");
        assert_eq!(
            suggestions[1],
            "  * name can no longer contain capital letters"
        );
    }

    #[test]
    fn core_message_is_shown_unwrapped() {
        let err = CliError::Core(
            ApplicationError::InstallFailed {
                command: "npm install --save-exact --save react react-dom".into(),
                exit_code: Some(1),
            }
            .into(),
        );
        assert_eq!(
            err.to_string(),
            "`npm install --save-exact --save react react-dom` failed"
        );
        assert_eq!(err.category(), ErrorCategory::External);
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn every_failure_exits_with_one() {
        let errors = [
            invalid_name(),
            CliError::Core(
                ApplicationError::PathNotWritable {
                    path: PathBuf::from("/ro"),
                }
                .into(),
            ),
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn unwritable_path_is_user_error() {
        let err = CliError::Core(
            ApplicationError::PathNotWritable {
                path: PathBuf::from("/ro"),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn missing_template_is_filesystem_error() {
        let err = CliError::Core(
            ApplicationError::MaterializeFailed {
                path: PathBuf::from("/no/template"),
                reason: "template directory not found".into(),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::Filesystem);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_message_and_suggestions() {
        let s = invalid_name().format_plain(false);
        assert!(s.contains("Error:\n  Cannot create a project named"));
        assert!(s.contains("because of npm naming restrictions"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("Please choose a different project name."));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::IoError {
            message: "failed to read the current directory".into(),
            source: io::Error::other("gone"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: gone"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn colored_report_has_same_text() {
        let err = invalid_name();
        let colored = err.format_colored(false);
        assert!(colored.contains("NODE_MODULES"));
        assert!(colored.contains("blacklisted"));
        assert!(!err.format_plain(false).contains('\u{1b}'));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(
            cli,
            Err(CliError::IoError { ref message, .. }) if message == "reading config"
        ));
    }
}

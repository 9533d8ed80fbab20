// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The project name breaks one or more package naming rules.
    ///
    /// `problems` holds every violation found, errors first, then warnings.
    #[error("Cannot create a project named '{name}' because of npm naming restrictions")]
    InvalidProjectName { name: String, problems: Vec<String> },

    /// No project name could be derived from the requested directory.
    #[error("Cannot derive a project name from '{input}': {reason}")]
    UnresolvableProjectName { input: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { problems, .. } => {
                let mut suggestions: Vec<String> =
                    problems.iter().map(|p| format!("  * {p}")).collect();
                suggestions.push("Please choose a different project name.".into());
                suggestions
            }
            Self::UnresolvableProjectName { .. } => vec![
                "Pass a directory name, for example: sprig my-app".into(),
                "The last path component becomes the package name".into(),
            ],
        }
    }
}

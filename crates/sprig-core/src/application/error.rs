//! Application layer errors.
//!
//! These errors represent stage failures in the scaffold pipeline, not naming
//! rules. Naming errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during scaffold orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The directory the project would be created in is not writable.
    #[error("The directory {path} is not writable")]
    PathNotWritable { path: PathBuf },

    /// The package manager exited unsuccessfully.
    #[error("`{command}` failed")]
    InstallFailed {
        command: String,
        exit_code: Option<i32>,
    },

    /// The package manager could not be started at all.
    #[error("Could not run package manager '{program}': {reason}")]
    InstallerUnavailable { program: String, reason: String },

    /// Copying the template tree failed.
    #[error("Failed to copy template at {path}: {reason}")]
    MaterializeFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The manifest could not be serialised.
    #[error("Failed to serialise manifest: {reason}")]
    SerializationFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathNotWritable { path } => vec![
                format!("Check that you can write to {}", path.display()),
                "Ensure the parent directory exists".into(),
                "Try a different location".into(),
            ],
            Self::InstallFailed { command, exit_code } => {
                let mut suggestions = vec![format!("Command failed: {command}")];
                if let Some(code) = exit_code {
                    suggestions.push(format!("The package manager exited with code {code}"));
                }
                suggestions.push("Check the installer output above for details".into());
                suggestions.push("Pass --skip-install to scaffold without installing".into());
                suggestions
            }
            Self::InstallerUnavailable { program, .. } => vec![
                format!("Ensure '{program}' is installed and in your PATH"),
                "Or set SPRIG_INSTALLER__PROGRAM to another package manager".into(),
            ],
            Self::MaterializeFailed { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Use --template to point at a different template directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::SerializationFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathNotWritable { .. } => ErrorCategory::Permission,
            Self::InstallFailed { .. } | Self::InstallerUnavailable { .. } => {
                ErrorCategory::Installation
            }
            Self::MaterializeFailed { .. } | Self::FilesystemError { .. } => {
                ErrorCategory::Filesystem
            }
            Self::SerializationFailed { .. } => ErrorCategory::Internal,
        }
    }
}

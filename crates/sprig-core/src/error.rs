//! Unified error handling for Sprig Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Sprig Core operations.
///
/// This enum wraps all possible errors that can occur when using sprig-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum SprigError {
    /// Errors from the domain layer (naming rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (stage failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl SprigError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad project name.
    Validation,
    /// Destination is not writable.
    Permission,
    /// The package manager failed or could not be started.
    Installation,
    /// Reading the template or writing the project failed.
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type SprigResult<T> = Result<T, SprigError>;

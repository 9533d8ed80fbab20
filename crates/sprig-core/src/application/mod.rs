//! Application layer for Sprig.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ManifestWriter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer but contains no naming
//! rules or fixed data itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ManifestWriter, NoopObserver, ScaffoldObserver, ScaffoldPlan, ScaffoldReport,
    ScaffoldService, Stage,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PackageInstaller, TemplateMaterializer};

pub use error::ApplicationError;

// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sprig.
//!
//! This module contains pure business logic with ZERO I/O. Filesystem
//! access and process spawning are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Fixed data lives here**: dependency sets, rename table, scripts
//!
pub mod entities;
pub mod error;

mod validation;

pub use entities::{
    dependency::{DEVELOPMENT_PACKAGES, DependencyKind, DependencySet, RUNTIME_PACKAGES},
    manifest::{LINE_ENDING, MANIFEST_FILE_NAME, Manifest, Scripts},
    project::{ProjectRequest, ResolvedProject},
    rename::{RenameRule, RenameTable},
    template::TemplateSource,
};

pub use error::DomainError;
pub use validation::{NameValidation, NameValidator};

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    // ========================================================================
    // Cross-entity checks
    // ========================================================================

    #[test]
    fn resolved_name_feeds_validator() {
        let project = ProjectRequest::new("apps/my-app")
            .resolve(Path::new("/work"))
            .unwrap();
        assert!(NameValidator::validate(project.name()).is_valid());
    }

    #[test]
    fn resolved_blacklisted_name_is_rejected() {
        let project = ProjectRequest::new("NODE_MODULES")
            .resolve(Path::new("/work"))
            .unwrap();
        let result = NameValidator::validate(project.name());
        assert!(!result.is_valid());
        assert!(result.problems().len() >= 2);
    }

    #[test]
    fn manifest_name_comes_from_resolved_project() {
        let project = ProjectRequest::new("my-app")
            .resolve(Path::new("/work"))
            .unwrap();
        assert_eq!(Manifest::new(project.name()).name, "my-app");
    }
}

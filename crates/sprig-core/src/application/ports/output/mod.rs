//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sprig-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{DependencySet, RenameTable, TemplateSource};
use crate::error::SprigResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprig_adapters::filesystem::LocalFilesystem` (production)
/// - `sprig_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Whether files can be created inside `dir`.
    ///
    /// Never fails: a missing directory, a permission problem or any other
    /// access error answers `false`.
    fn is_writable(&self, dir: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SprigResult<()>;

    /// Write content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> SprigResult<()>;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for the external package manager.
///
/// Implemented by:
/// - `sprig_adapters::installer::CommandInstaller` (spawns a real process)
/// - `sprig_adapters::installer::RecordingInstaller` (testing)
///
/// ## Design Notes
///
/// - One call installs one [`DependencySet`]; an empty set spawns nothing.
/// - `root` is the project directory; installs never depend on the process
///   working directory.
/// - Calls block until the installer exits. Callers must not run two
///   installs concurrently against the same project.
#[cfg_attr(test, mockall::automock)]
pub trait PackageInstaller: Send + Sync {
    /// Install `dependencies` into the project at `root`.
    fn install(&self, root: &Path, dependencies: &DependencySet) -> SprigResult<()>;
}

/// Port for copying the template tree into a new project.
///
/// Implemented by:
/// - `sprig_adapters::template::TemplateCopier`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateMaterializer: Send + Sync {
    /// Copy every file of `template` into `dest_root`, keeping the relative
    /// layout, overwriting existing files and renaming base file names
    /// through `renames`.
    ///
    /// Not transactional: files copied before a failure stay in place.
    fn materialize(
        &self,
        template: &TemplateSource,
        dest_root: &Path,
        renames: &RenameTable,
    ) -> SprigResult<()>;
}

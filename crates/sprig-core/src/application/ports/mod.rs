//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sprig-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Writability checks and file operations
//!   - `PackageInstaller`: Dependency installation
//!   - `TemplateMaterializer`: Template tree copy
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, PackageInstaller, TemplateMaterializer};

#[cfg(test)]
pub use output::{MockFilesystem, MockPackageInstaller, MockTemplateMaterializer};

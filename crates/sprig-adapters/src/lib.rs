//! Infrastructure adapters for Sprig.
//!
//! This crate implements the ports defined in `sprig-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod installer;
pub mod template;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{CommandInstaller, RecordingInstaller};
pub use template::TemplateCopier;

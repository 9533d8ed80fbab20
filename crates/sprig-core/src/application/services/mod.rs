//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "write the manifest".

pub mod manifest_writer;
pub mod scaffold_service;

pub use manifest_writer::ManifestWriter;
pub use scaffold_service::{
    NoopObserver, ScaffoldObserver, ScaffoldPlan, ScaffoldReport, ScaffoldService, Stage,
};

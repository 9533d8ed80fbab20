//! Sprig Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprig
//! front-end project scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sprig-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, ManifestWriter)     │
//! │   Sequences the scaffold pipeline       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, PackageInstaller,          │
//! │  TemplateMaterializer)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      sprig-adapters (Infrastructure)    │
//! │ (LocalFilesystem, CommandInstaller, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectRequest, Manifest, NameValidator│
//! │  DependencySet, RenameTable)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sprig_core::prelude::*;
//!
//! // Adapters come from `sprig-adapters`.
//! let service = ScaffoldService::new(filesystem, installer, materializer);
//!
//! let plan = ScaffoldPlan::new("/home/me/code", "/opt/sprig/template");
//! let report = service.scaffold(&ProjectRequest::new("my-app"), &plan).unwrap();
//! println!("created {}", report.project.absolute_path().display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ManifestWriter, ScaffoldObserver, ScaffoldPlan, ScaffoldReport, ScaffoldService, Stage,
        ports::{Filesystem, PackageInstaller, TemplateMaterializer},
    };
    pub use crate::domain::{
        DependencyKind, DependencySet, Manifest, NameValidation, NameValidator, ProjectRequest,
        RenameRule, RenameTable, ResolvedProject, TemplateSource,
    };
    pub use crate::error::{SprigError, SprigResult};
}

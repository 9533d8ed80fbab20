pub mod dependency;
pub mod manifest;
pub mod project;
pub mod rename;
pub mod template;

pub use crate::domain::DomainError;
pub use dependency::{DependencyKind, DependencySet};
pub use manifest::Manifest;
pub use project::{ProjectRequest, ResolvedProject};
pub use rename::{RenameRule, RenameTable};
pub use template::TemplateSource;

//! Template materializer adapters.

mod copier;

pub use copier::TemplateCopier;

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and help
//! text.  No business logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprig",
    bin_name = "sprig",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a React + Parcel app in one command",
    long_about = "Sprig creates a new front-end project: it writes package.json, \
                  installs React and the Parcel/ESLint toolchain with npm, and \
                  copies a starter template.",
    after_help = "EXAMPLES:\n\
        \x20 sprig my-app\n\
        \x20 sprig ../sites/landing --skip-install\n\
        \x20 SPRIG_INSTALLER__PROGRAM=pnpm sprig my-app",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Directory to create the project in.  Its last segment becomes the
    /// package name.
    #[arg(value_name = "PROJECT_DIRECTORY", help = "Project directory to create")]
    pub project_directory: String,

    /// Write the manifest and template without running the package manager.
    #[arg(long = "skip-install", help = "Do not install dependencies")]
    pub skip_install: bool,

    /// Copy this template directory instead of the bundled one.
    #[arg(
        long = "template",
        value_name = "DIR",
        help = "Template directory to copy"
    )]
    pub template: Option<PathBuf>,
}

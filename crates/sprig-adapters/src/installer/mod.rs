//! Package installer adapters.

mod command;
mod recording;

pub use command::{CommandInstaller, QUIET_INSTALL_ENV};
pub use recording::{InstallCall, RecordingInstaller};

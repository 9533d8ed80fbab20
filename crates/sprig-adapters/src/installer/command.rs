//! Package installer adapter that runs the package manager as a child process.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info, instrument};

use sprig_core::{
    application::{ApplicationError, ports::PackageInstaller},
    domain::DependencySet,
    error::SprigResult,
};

/// Environment added to every install, over the inherited environment.
///
/// Silences post-install ad and funding prompts of common packages.
pub const QUIET_INSTALL_ENV: &[(&str, &str)] = &[
    ("ADBLOCK", "1"),
    ("DISABLE_OPENCOLLECTIVE", "1"),
    ("OPEN_SOURCE_CONTRIBUTOR", "true"),
];

/// Runs `<program> install --save-exact [--save|--save-dev] <package>...`.
///
/// The child inherits stdin, stdout and stderr, so installer progress shows
/// up in the invoking terminal. Only the exit status is observed.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    program: String,
}

impl CommandInstaller {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for one install call.
    pub fn args(dependencies: &DependencySet) -> Vec<String> {
        let mut args = vec![
            "install".to_owned(),
            "--save-exact".to_owned(),
            dependencies.kind().save_flag().to_owned(),
        ];
        args.extend(dependencies.packages().iter().cloned());
        args
    }

    /// The full command line, as reported when the install fails.
    pub fn command_line(&self, dependencies: &DependencySet) -> String {
        format!("{} {}", self.program, Self::args(dependencies).join(" "))
    }

    fn command(&self) -> Command {
        Command::new(executable(&self.program))
    }
}

impl PackageInstaller for CommandInstaller {
    #[instrument(skip_all, fields(kind = %dependencies.kind(), root = %root.display()))]
    fn install(&self, root: &Path, dependencies: &DependencySet) -> SprigResult<()> {
        if dependencies.is_empty() {
            debug!("Nothing to install");
            return Ok(());
        }

        let command_line = self.command_line(dependencies);
        info!(command = %command_line, "Running package manager");

        let status = self
            .command()
            .args(Self::args(dependencies))
            .current_dir(root)
            .envs(QUIET_INSTALL_ENV.iter().copied())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::InstallerUnavailable {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            debug!(command = %command_line, "Install finished");
            Ok(())
        } else {
            Err(ApplicationError::InstallFailed {
                command: command_line,
                exit_code: status.code(),
            }
            .into())
        }
    }
}

/// Package managers ship as `.cmd` shims on Windows.
#[cfg(windows)]
fn executable(program: &str) -> String {
    if Path::new(program).extension().is_some() {
        program.to_owned()
    } else {
        format!("{program}.cmd")
    }
}

#[cfg(not(windows))]
fn executable(program: &str) -> String {
    program.to_owned()
}

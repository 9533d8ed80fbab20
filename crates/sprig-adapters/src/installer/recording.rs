//! Installer that records calls instead of spawning processes (testing).

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use sprig_core::{
    application::{ApplicationError, ports::PackageInstaller},
    domain::{DependencyKind, DependencySet},
    error::SprigResult,
};

/// One recorded install call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCall {
    pub root: PathBuf,
    pub dependencies: DependencySet,
}

/// Records every call; optionally fails installs of one kind.
///
/// Empty sets are skipped without being recorded, like a real installer.
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    calls: Arc<Mutex<Vec<InstallCall>>>,
    fail_on: Option<(DependencyKind, i32)>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail installs of `kind` as if the process exited with `exit_code`.
    pub fn failing_on(kind: DependencyKind, exit_code: i32) -> Self {
        Self {
            calls: Arc::default(),
            fail_on: Some((kind, exit_code)),
        }
    }

    pub fn calls(&self) -> Vec<InstallCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(&self, root: &Path, dependencies: &DependencySet) -> SprigResult<()> {
        if dependencies.is_empty() {
            return Ok(());
        }

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(InstallCall {
                root: root.to_path_buf(),
                dependencies: dependencies.clone(),
            });
        }

        match self.fail_on {
            Some((kind, exit_code)) if kind == dependencies.kind() => {
                Err(ApplicationError::InstallFailed {
                    command: format!(
                        "recorded install --save-exact {} {}",
                        kind.save_flag(),
                        dependencies.packages().join(" ")
                    ),
                    exit_code: Some(exit_code),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

//! Scaffold Service - main application orchestrator.
//!
//! This service sequences the entire scaffolding workflow:
//! 1. Validate the destination and project name
//! 2. Create the project directory
//! 3. Write the manifest
//! 4. Install runtime, then development dependencies
//! 5. Copy the template tree
//!
//! Every stage runs to completion before the next one starts. The first
//! failure ends the run; earlier stages are not undone.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError, ManifestWriter,
        ports::{Filesystem, PackageInstaller, TemplateMaterializer},
    },
    domain::{
        DependencyKind, DependencySet, NameValidator, ProjectRequest, RenameTable,
        ResolvedProject, TemplateSource,
    },
    error::{SprigError, SprigResult},
};

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Validating,
    DirectoryPreparing,
    ManifestWriting,
    InstallingRuntime,
    InstallingDev,
    Materializing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Validating => "validating",
            Self::DirectoryPreparing => "preparing directory",
            Self::ManifestWriting => "writing manifest",
            Self::InstallingRuntime => "installing runtime dependencies",
            Self::InstallingDev => "installing development dependencies",
            Self::Materializing => "copying template",
            Self::Done => "done",
        };
        f.write_str(s)
    }
}

/// Receives stage transitions, e.g. to print progress.
pub trait ScaffoldObserver: Send + Sync {
    /// Called before `stage` runs. `project` is `None` only while validating.
    fn stage_started(&self, stage: Stage, project: Option<&ResolvedProject>) {
        let _ = (stage, project);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScaffoldObserver for NoopObserver {}

/// Inputs of one scaffold run besides the project name.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    /// Directory relative project names resolve against.
    pub base_dir: PathBuf,
    /// Template tree to copy.
    pub template: TemplateSource,
    pub runtime: DependencySet,
    pub development: DependencySet,
    pub renames: RenameTable,
    /// Program used in the suggested next-step commands.
    pub runner: String,
}

impl ScaffoldPlan {
    /// Plan with the fixed dependency sets and rename rules.
    pub fn new(base_dir: impl Into<PathBuf>, template: impl Into<TemplateSource>) -> Self {
        Self {
            base_dir: base_dir.into(),
            template: template.into(),
            runtime: DependencySet::runtime(),
            development: DependencySet::development(),
            renames: RenameTable::standard(),
            runner: "npm".into(),
        }
    }

    /// Install nothing in either phase.
    pub fn without_install(mut self) -> Self {
        self.runtime = DependencySet::empty(DependencyKind::Runtime);
        self.development = DependencySet::empty(DependencyKind::Development);
        self
    }

    pub fn with_runner(mut self, runner: impl Into<String>) -> Self {
        self.runner = runner.into();
        self
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project: ResolvedProject,
    /// Shell commands the user can run next, in order.
    pub next_steps: Vec<String>,
}

impl ScaffoldReport {
    fn new(project: ResolvedProject, base_dir: &Path, runner: &str) -> Self {
        let next_steps = vec![
            format!("cd {}", cd_target(&project, base_dir).display()),
            format!("{runner} start"),
            format!("{runner} run build"),
        ];
        Self {
            project,
            next_steps,
        }
    }
}

/// Directory to `cd` into from `base_dir`: relative when the project lies
/// below it, absolute otherwise.
fn cd_target<'a>(project: &'a ResolvedProject, base_dir: &Path) -> &'a Path {
    match project.absolute_path().strip_prefix(base_dir) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative,
        _ => project.absolute_path(),
    }
}

/// Main scaffolding service.
///
/// Owns the adapters and the stage order; holds no per-run state.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    installer: Box<dyn PackageInstaller>,
    materializer: Box<dyn TemplateMaterializer>,
    observer: Box<dyn ScaffoldObserver>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use sprig_core::application::{ScaffoldService, ports::*};
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem,   // impl Filesystem
    ///     installer,    // impl PackageInstaller
    ///     materializer, // impl TemplateMaterializer
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        installer: Box<dyn PackageInstaller>,
        materializer: Box<dyn TemplateMaterializer>,
    ) -> Self {
        Self {
            filesystem,
            installer,
            materializer,
            observer: Box::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn ScaffoldObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Scaffold a new project.
    ///
    /// Nothing on disk changes unless validation passes.
    #[instrument(
        skip_all,
        fields(
            request = %request.raw_name(),
            base_dir = %plan.base_dir.display()
        )
    )]
    pub fn scaffold(
        &self,
        request: &ProjectRequest,
        plan: &ScaffoldPlan,
    ) -> SprigResult<ScaffoldReport> {
        self.observer.stage_started(Stage::Validating, None);
        let project = self
            .validate(request, plan)
            .inspect_err(|e| stage_failed(Stage::Validating, e))?;
        info!(project = %project, "Project resolved");

        let root = project.absolute_path();

        self.run_stage(Stage::DirectoryPreparing, &project, || {
            self.filesystem.create_dir_all(root)
        })?;

        self.run_stage(Stage::ManifestWriting, &project, || {
            ManifestWriter::new(self.filesystem.as_ref())
                .write(root, project.name())
                .map(|_| ())
        })?;

        // Both installs touch the same manifest and package cache: strictly
        // one after the other.
        self.run_stage(Stage::InstallingRuntime, &project, || {
            self.installer.install(root, &plan.runtime)
        })?;
        self.run_stage(Stage::InstallingDev, &project, || {
            self.installer.install(root, &plan.development)
        })?;

        self.run_stage(Stage::Materializing, &project, || {
            self.materializer
                .materialize(&plan.template, root, &plan.renames)
        })?;

        self.observer.stage_started(Stage::Done, Some(&project));
        info!(project = %project.name(), "Scaffold completed successfully");

        Ok(ScaffoldReport::new(project, &plan.base_dir, &plan.runner))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Resolve the request, check the parent is writable, check the name,
    /// check a template directory exists.
    fn validate(
        &self,
        request: &ProjectRequest,
        plan: &ScaffoldPlan,
    ) -> SprigResult<ResolvedProject> {
        let project = request.resolve(&plan.base_dir)?;

        // The project directory may not exist yet; its parent must accept it.
        let parent = project.parent().unwrap_or(project.absolute_path());
        if !self.filesystem.is_writable(parent) {
            return Err(ApplicationError::PathNotWritable {
                path: parent.to_path_buf(),
            }
            .into());
        }

        NameValidator::validate(project.name()).into_result(project.name())?;

        if let Some(root) = plan.template.directory() {
            if !self.filesystem.is_dir(root) {
                return Err(ApplicationError::MaterializeFailed {
                    path: root.to_path_buf(),
                    reason: "template directory not found".into(),
                }
                .into());
            }
        }

        Ok(project)
    }

    fn run_stage<T>(
        &self,
        stage: Stage,
        project: &ResolvedProject,
        op: impl FnOnce() -> SprigResult<T>,
    ) -> SprigResult<T> {
        self.observer.stage_started(stage, Some(project));
        info!(stage = %stage, "Stage started");
        op().inspect_err(|e| stage_failed(stage, e))
    }
}

fn stage_failed(stage: Stage, error: &SprigError) {
    debug!(stage = %stage, error = %error, "Stage failed");
}

//! Implementation of `sprig <PROJECT_DIRECTORY>`.
//!
//! Responsibility: turn arguments and config into a [`ScaffoldPlan`], wire
//! the adapters, run the core scaffold service and display results.  No
//! business logic lives here.

use tracing::{debug, info, instrument};

use sprig_adapters::{CommandInstaller, LocalFilesystem, TemplateCopier};
use sprig_core::{
    application::{ScaffoldObserver, ScaffoldPlan, ScaffoldReport, ScaffoldService, Stage},
    domain::{DependencySet, ProjectRequest, ResolvedProject},
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute a scaffold run.
///
/// Dispatch sequence:
/// 1. Build the plan from the working directory, flags and config
/// 2. Wire the adapters and the progress observer
/// 3. Run the scaffold service
/// 4. Print next-steps guidance
#[instrument(skip_all, fields(project = %cli.project_directory))]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let base_dir =
        std::env::current_dir().with_cli_context(|| "failed to read the current directory")?;
    let plan = build_plan(&cli, &config, base_dir);
    let program = config.installer.program;

    debug!(
        program = %program,
        template = %plan.template,
        install = !(plan.runtime.is_empty() && plan.development.is_empty()),
        "Plan resolved"
    );

    let observer = ProgressObserver {
        output: output.clone(),
        program: program.clone(),
        runtime: plan.runtime.clone(),
        development: plan.development.clone(),
    };
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(CommandInstaller::new(program)),
        Box::new(TemplateCopier::new()),
    )
    .with_observer(Box::new(observer));

    let report = service.scaffold(&ProjectRequest::new(cli.project_directory), &plan)?;
    info!(project = %report.project, "Scaffold completed");

    print_report(&report, &output)?;
    Ok(())
}

fn build_plan(cli: &Cli, config: &AppConfig, base_dir: std::path::PathBuf) -> ScaffoldPlan {
    let template = config.template(cli.template.as_deref());
    let runner = config.installer.program.as_str();
    let plan = ScaffoldPlan::new(base_dir, template).with_runner(runner);
    if cli.skip_install || config.installer.skip {
        plan.without_install()
    } else {
        plan
    }
}

fn print_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success(&format!(
        "Success! Created {} at {}",
        report.project.name(),
        report.project.absolute_path().display()
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    for step in &report.next_steps {
        output.command(step)?;
    }
    Ok(())
}

/// Prints one progress line per stage that does visible work.
struct ProgressObserver {
    output: OutputManager,
    program: String,
    runtime: DependencySet,
    development: DependencySet,
}

impl ProgressObserver {
    fn message(&self, stage: Stage, project: Option<&ResolvedProject>) -> Option<String> {
        match stage {
            Stage::DirectoryPreparing => {
                let path = project?.absolute_path().display();
                Some(format!("Creating a new app in {path}."))
            }
            Stage::InstallingRuntime => install_message(&self.runtime, &self.program, "packages"),
            Stage::InstallingDev => {
                install_message(&self.development, &self.program, "dev dependencies")
            }
            Stage::Materializing => Some("Copying template files...".into()),
            Stage::Validating | Stage::ManifestWriting | Stage::Done => None,
        }
    }
}

fn install_message(set: &DependencySet, program: &str, label: &str) -> Option<String> {
    if set.is_empty() {
        return None;
    }
    let packages = set.packages().join(", ");
    Some(format!("Installing {label} with {program}: {packages}"))
}

impl ScaffoldObserver for ProgressObserver {
    fn stage_started(&self, stage: Stage, project: Option<&ResolvedProject>) {
        let Some(message) = self.message(stage, project) else {
            return;
        };
        let written = if stage == Stage::DirectoryPreparing {
            self.output
                .header(&message)
                .and_then(|()| self.output.print(""))
        } else {
            self.output.info(&message)
        };
        if let Err(e) = written {
            debug!(error = %e, "Failed to write progress line");
        }
    }
}

//! Implementation of the pipeline setup command.
//!
//! Responsibility: translate CLI arguments into a core `SetupRequest`, call
//! the setup service, and display results. No business logic lives here.

use tracing::{debug, info, instrument};

use pipeforge_adapters::{DiskTemplateSource, LocalFilesystem};
use pipeforge_core::{
    application::SetupService,
    domain::{AppType, SetupRequest},
};

use crate::{
    cli::{GlobalArgs, SetupArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the pipeline setup.
///
/// Dispatch sequence:
/// 1. Parse the app type (unknown values error out with the known list)
/// 2. Resolve the templates root (flag overrides config)
/// 3. Build adapters and run the core service
/// 4. Print what was created
#[instrument(skip_all, fields(project = %args.project_name))]
pub fn execute(
    args: SetupArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Parse app type
    let app_type: AppType = args.app_type.parse().map_err(pipeforge_core::error::PipeforgeError::from)?;

    // 2. Resolve templates root
    let templates_root = global
        .templates
        .clone()
        .unwrap_or_else(|| config.templates.root.clone());
    if !templates_root.is_dir() {
        // Copying degrades to a no-op without a template tree; the
        // generated files are still written.
        output.warning(&format!(
            "Templates directory not found at {}",
            templates_root.display()
        ))?;
    }

    debug!(
        app_type = %app_type,
        templates_root = %templates_root.display(),
        "Setup resolved"
    );

    output.header(&format!(
        "Setting up {} pipeline for {}",
        app_type, args.project_name
    ))?;

    // 3. Create adapters and run the service
    let templates = Box::new(DiskTemplateSource::new(templates_root));
    let filesystem = Box::new(LocalFilesystem::new());
    let service = SetupService::new(templates, filesystem);

    let request = SetupRequest::new(
        args.project_path.as_path(),
        app_type,
        args.project_name.as_str(),
    );
    info!(project_path = %args.project_path.display(), "Setup started");

    let report = service.setup(&request, &config.defaults).map_err(CliError::Core)?;

    info!(copied_files = report.copied_files, "Setup completed");

    // 4. Success + next steps
    output.success(&format!(
        "Pipeline setup complete for {}",
        args.project_name
    ))?;
    output.info(&format!("Files created in: {}", report.devops_dir.display()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  review {}", report.workflow_path.display()))?;
        output.print("  add your server IPs to devops/ansible/inventory.template")?;
    }

    Ok(())
}

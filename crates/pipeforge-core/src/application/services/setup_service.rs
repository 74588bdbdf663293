//! Setup Service - main application orchestrator.
//!
//! This service coordinates the entire pipeline-setup workflow:
//! 1. Copy the app-type template tree and the common tree into `devops/`
//! 2. Generate the Terraform variables and Ansible inventory files
//! 3. Render and write the CI workflow
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateSource},
    domain::{PipelineDefaults, RenderContext, SetupRequest},
    error::PipeforgeResult,
};

/// Name of the shared template tree merged into every project.
const COMMON_TREE: &str = "common";

/// What a completed setup produced, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    /// The populated devops directory.
    pub devops_dir: PathBuf,
    /// The written CI workflow file.
    pub workflow_path: PathBuf,
    /// Number of template files copied (app-type tree + common tree).
    pub copied_files: usize,
}

/// Main pipeline-setup service.
///
/// Orchestrates template copying, config generation, and workflow rendering.
pub struct SetupService {
    templates: Box<dyn TemplateSource>,
    filesystem: Box<dyn Filesystem>,
}

impl SetupService {
    /// Create a new setup service with the given adapters.
    pub fn new(templates: Box<dyn TemplateSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
        }
    }

    /// Set up the DevOps pipeline for a project.
    ///
    /// This is the main use case. Steps run in a fixed sequence with no
    /// partial-failure cleanup: a run that fails halfway leaves whatever
    /// files were already written in place.
    #[instrument(
        skip_all,
        fields(
            app_type = %request.app_type(),
            project = %request.project_name(),
            project_path = %request.project_path().display()
        )
    )]
    pub fn setup(
        &self,
        request: &SetupRequest,
        defaults: &PipelineDefaults,
    ) -> PipeforgeResult<SetupReport> {
        info!(
            "Setting up {} pipeline for {}",
            request.app_type(),
            request.project_name()
        );

        let devops_dir = request.devops_dir();
        self.filesystem.create_dir_all(&devops_dir)?;

        // 1. Copy templates: app-type tree first, then common merged over it.
        let mut copied_files = 0;
        copied_files += self.copy_tree(request.app_type().template_dir(), &devops_dir)?;
        copied_files += self.copy_tree(COMMON_TREE, &devops_dir)?;

        // 2. Generate project-specific configuration files.
        let context = RenderContext::new(request.project_name(), request.app_type());
        self.generate_configs(&context, defaults, &devops_dir)?;

        // 3. Render and write the CI workflow.
        let workflow_path = self.generate_workflow(&context, request)?;

        info!(copied_files, "Pipeline setup complete");
        Ok(SetupReport {
            devops_dir,
            workflow_path,
            copied_files,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Copy one template tree into the target directory, merging with and
    /// overwriting existing files. A missing tree is not an error.
    fn copy_tree(&self, name: &str, target: &Path) -> PipeforgeResult<usize> {
        if !self.templates.has_tree(name) {
            warn!(tree = name, "Template tree not found, skipping");
            return Ok(0);
        }

        let files = self.templates.tree_files(name)?;
        for file in &files {
            let dest = target.join(&file.relative_path);
            if let Some(parent) = dest.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&dest, &file.content)?;
        }

        debug!(tree = name, files = files.len(), "Template tree copied");
        Ok(files.len())
    }

    /// Write `terraform/terraform.tfvars` and `ansible/inventory.template`.
    ///
    /// Both subdirectories are created here rather than assumed to exist
    /// from the copied template tree.
    fn generate_configs(
        &self,
        context: &RenderContext,
        defaults: &PipelineDefaults,
        devops_dir: &Path,
    ) -> PipeforgeResult<()> {
        let terraform_dir = devops_dir.join("terraform");
        self.filesystem.create_dir_all(&terraform_dir)?;
        self.filesystem.write_file(
            &terraform_dir.join("terraform.tfvars"),
            &terraform_tfvars(context, defaults),
        )?;

        let ansible_dir = devops_dir.join("ansible");
        self.filesystem.create_dir_all(&ansible_dir)?;
        self.filesystem.write_file(
            &ansible_dir.join("inventory.template"),
            &ansible_inventory(context),
        )?;

        debug!("Configuration files generated");
        Ok(())
    }

    /// Select the workflow template by app type, render it, and write it to
    /// `.github/workflows/deploy.yml` under the project path.
    fn generate_workflow(
        &self,
        context: &RenderContext,
        request: &SetupRequest,
    ) -> PipeforgeResult<PathBuf> {
        let template_name = request.app_type().workflow_template();
        let content = self.templates.read_workflow(template_name)?;
        let rendered = context.render(&content);

        let workflow_path = request.workflow_path();
        if let Some(parent) = workflow_path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&workflow_path, &rendered)?;

        debug!(template = template_name, "Workflow written");
        Ok(workflow_path)
    }
}

// ── Generated file contents ───────────────────────────────────────────────────

/// Terraform variable definitions: project identity plus the defaults from
/// the pipeline configuration. Booleans render as lowercase literals.
fn terraform_tfvars(context: &RenderContext, defaults: &PipelineDefaults) -> String {
    format!(
        r#"
project_name = "{project_name}"
app_type = "{app_type}"
aws_region = "{aws_region}"
instance_type = "{instance_type}"
min_instances = {min_instances}
max_instances = {max_instances}
enable_database = {enable_database}
database_type = "{database_type}"
database_instance_class = "{database_instance_class}"
"#,
        project_name = context.project_name(),
        app_type = context.app_type(),
        aws_region = defaults.aws_region,
        instance_type = defaults.instance_type,
        min_instances = defaults.min_instances,
        max_instances = defaults.max_instances,
        enable_database = defaults.enable_database,
        database_type = defaults.database_type,
        database_instance_class = defaults.database_instance_class,
    )
}

/// Ansible inventory template: two empty host groups with placeholder
/// comments, and project identity in `[all:vars]`.
fn ansible_inventory(context: &RenderContext) -> String {
    format!(
        r#"
[staging]
# Add your staging server IPs here
# staging-1 ansible_host=10.0.1.10 ansible_user=ec2-user

[production]
# Add your production server IPs here
# prod-1 ansible_host=10.0.2.10 ansible_user=ec2-user

[all:vars]
project_name={project_name}
app_type={app_type}
"#,
        project_name = context.project_name(),
        app_type = context.app_type(),
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

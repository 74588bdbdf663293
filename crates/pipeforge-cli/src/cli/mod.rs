//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value names.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Pipeforge is a one-shot tool, so there are no subcommands: the three
/// positional arguments describe the single setup to perform.
#[derive(Debug, Parser)]
#[command(
    name    = "pipeforge",
    bin_name = "pipeforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} DevOps pipeline scaffolding",
    long_about = "Pipeforge scaffolds DevOps pipeline configuration \
                  (Terraform variables, Ansible inventory, CI workflow) \
                  into a target project directory.",
    after_help = "EXAMPLES:\n\
        \x20 pipeforge ./my-api node-backend my-api\n\
        \x20 pipeforge /srv/shop react-frontend shop-web --config infra/pipeline-config.yml\n\
        \x20 pipeforge ./orders java-spring-boot orders -v\n\n\
        APP TYPES: java-spring-boot, react-frontend, node-backend",
)]
pub struct Cli {
    /// Flags available on the invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The setup to perform.
    #[command(flatten)]
    pub setup: SetupArgs,
}

// ── setup arguments ───────────────────────────────────────────────────────────

/// The three positional arguments of a setup invocation.
#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Root directory of the target project.
    #[arg(value_name = "PROJECT_PATH", help = "Target project root")]
    pub project_path: PathBuf,

    /// App type key selecting the template set and CI workflow.
    ///
    /// Parsed into the core `AppType` by the command handler so that an
    /// unrecognized value produces the domain error with its suggestion
    /// list, not a bare clap message.
    #[arg(value_name = "APP_TYPE", help = "App type (e.g. node-backend)")]
    pub app_type: String,

    /// Project name interpolated into the generated files.
    #[arg(value_name = "PROJECT_NAME", help = "Project name")]
    pub project_name: String,
}

// ── tests ─────────────────────────────────────────────────────────────────────
